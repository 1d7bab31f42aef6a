use crate::config::OverpassConfig;
use crate::domain::BoundingBox;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = "duskmap/0.1.0";

/// Client-side slack over the query's server-side timeout, so a dead
/// socket cannot outlive the query it carries
const CLIENT_TIMEOUT_SLACK_SECS: u64 = 10;

/// Errors from the Overpass client
///
/// The UI flattens every variant to its display string; no variant gets
/// special treatment upstream.
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("Overpass request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Overpass API returned status {0}")]
    Status(u16),
}

/// Raw Overpass API response
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<Element>,
}

/// A single element from Overpass
///
/// Queried with `out geom`, ways carry their vertex coordinates inline,
/// so no separate node lookup pass is needed.
#[derive(Debug, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: u64,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub geometry: Option<Vec<GeomPoint>>,
}

/// One vertex of a way's inline geometry
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeomPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Build the Overpass QL query for one district view
///
/// Selects every highway way and every building way inside the bounding
/// box, with inline geometry.
fn build_query(bbox: &BoundingBox, timeout_secs: u64) -> String {
    format!(
        r#"[out:json][timeout:{timeout}];
(
  way["highway"]({south},{west},{north},{east});
  way["building"]({south},{west},{north},{east});
);
out geom;"#,
        timeout = timeout_secs,
        south = bbox.south,
        west = bbox.west,
        north = bbox.north,
        east = bbox.east
    )
}

/// Fetch road and building geometry for a district
///
/// Issues exactly one request against the configured endpoint; a failure
/// of any kind is returned immediately, with no retry and no mirror
/// failover.
///
/// # Arguments
/// * `bbox` - District bounding box in WGS84 degrees
/// * `config` - Endpoint URL and server-side timeout
pub fn fetch_district_geometry(
    bbox: &BoundingBox,
    config: &OverpassConfig,
) -> Result<OverpassResponse, OverpassError> {
    let query = build_query(bbox, config.timeout_secs);

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(
            config.timeout_secs + CLIENT_TIMEOUT_SLACK_SECS,
        ))
        .build()?;

    // Overpass expects form-encoded POST data: data=<query>
    let response = client
        .post(&config.url)
        .form(&[("data", query.as_str())])
        .send()?;

    match response.status().as_u16() {
        200 => Ok(response.json()?),
        status => Err(OverpassError::Status(status)),
    }
}
