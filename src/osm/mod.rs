pub mod parser;

pub use parser::{MAX_RENDERED_BUILDINGS, parse_buildings, parse_district, parse_roads};
