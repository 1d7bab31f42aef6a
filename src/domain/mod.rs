pub mod building;
pub mod district;
pub mod poi;
pub mod road;

pub use building::BuildingFootprint;
pub use district::{BoundingBox, DISTRICTS, District, DistrictGeometry};
pub use poi::PointOfInterest;
pub use road::{RoadClass, RoadPath};
