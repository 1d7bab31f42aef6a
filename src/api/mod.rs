pub mod overpass;

pub use overpass::{Element, GeomPoint, OverpassError, OverpassResponse, fetch_district_geometry};
