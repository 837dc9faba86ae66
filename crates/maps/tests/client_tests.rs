use maps::MapsClient;
use nosh::shared::geo::Coordinate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pin(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate {
        latitude,
        longitude,
    }
}

fn route_body(distance: f64) -> serde_json::Value {
    serde_json::json!({
        "Fastest": {
            "path": {
                "path": [
                    {
                        "id": "n-415",
                        "coordinate": { "latitude": 40.4428, "longitude": -79.9394 },
                        "floor": { "buildingCode": "TCS", "level": "1" }
                    }
                ],
                "distance": distance
            },
            "instructions": [
                { "action": "walk", "distance": distance, "node_id": "n-415" }
            ]
        }
    })
}

#[tokio::test]
async fn walking_path_parses_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/path"))
        .and(query_param("start", "40.44,-79.94"))
        .and(query_param("end", "40.45,-79.95"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&route_body(312.5)))
        .mount(&server)
        .await;

    let client = MapsClient::new(&server.uri()).unwrap();
    let route = client
        .walking_path(&pin(40.44, -79.94), &pin(40.45, -79.95))
        .await
        .unwrap();

    assert_eq!(route.walking_distance().as_meters(), 312.5);
    assert_eq!(route.fastest.path.path.len(), 1);
    assert_eq!(route.fastest.path.path[0].id, "n-415");
    assert_eq!(route.fastest.instructions[0].action, "walk");
    assert_eq!(route.fastest.instructions[0].node_id, "n-415");
}

#[tokio::test]
async fn walking_path_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/path"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MapsClient::new(&server.uri()).unwrap();
    let result = client
        .walking_path(&pin(40.44, -79.94), &pin(40.45, -79.95))
        .await;

    assert!(matches!(result, Err(maps::Error::Http(_))));
}

#[tokio::test]
async fn walking_path_rejects_garbage_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/path"))
        .respond_with(ResponseTemplate::new(200).set_body_string("53 widgets"))
        .mount(&server)
        .await;

    let client = MapsClient::new(&server.uri()).unwrap();
    let result = client
        .walking_path(&pin(40.44, -79.94), &pin(40.45, -79.95))
        .await;

    assert!(matches!(result, Err(maps::Error::Decode { .. })));
}

#[tokio::test]
async fn walking_path_rejects_wrong_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/path"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "Slowest": {} })),
        )
        .mount(&server)
        .await;

    let client = MapsClient::new(&server.uri()).unwrap();
    let result = client
        .walking_path(&pin(40.44, -79.94), &pin(40.45, -79.95))
        .await;

    assert!(matches!(result, Err(maps::Error::Decode { .. })));
}
