use serde::Deserialize;

use nosh::shared::geo::{Coordinate, Distance};

/// Route envelope as the wayfinding API returns it.
#[derive(Deserialize, Debug, Clone)]
pub struct RouteResponse {
    #[serde(rename = "Fastest")]
    pub fastest: FastestRoute,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FastestRoute {
    pub path: WalkingPath,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WalkingPath {
    #[serde(default)]
    pub path: Vec<PathNode>,
    pub distance: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PathNode {
    pub id: String,
    pub coordinate: Coordinate,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Instruction {
    pub action: String,
    pub distance: f64,
    pub node_id: String,
}

impl RouteResponse {
    pub fn walking_distance(&self) -> Distance {
        Distance::from_meters(self.fastest.path.distance)
    }
}
