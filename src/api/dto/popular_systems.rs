//! DTOs for the curated systems endpoint.

use serde::Serialize;

use crate::domain::entities::PopularSystem;

#[derive(Debug, Serialize)]
pub struct PopularSystemsResponse {
    pub systems: Vec<PopularSystemInfo>,
    pub note: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularSystemInfo {
    pub name: String,
    pub description: String,
    pub planet_count: u32,
}

impl From<&PopularSystem> for PopularSystemInfo {
    fn from(system: &PopularSystem) -> Self {
        Self {
            name: system.name.to_string(),
            description: system.description.to_string(),
            planet_count: system.planet_count,
        }
    }
}
