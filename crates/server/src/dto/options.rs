use nosh::engine::SortMode;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SortOptionDto {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<SortMode> for SortOptionDto {
    fn from(mode: SortMode) -> Self {
        Self {
            value: mode.as_str(),
            label: mode.label(),
        }
    }
}
