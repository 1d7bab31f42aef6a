use crate::domain::BoundingBox;

/// Equirectangular projection from WGS84 to local meters
///
/// Uses the city-scale approximation:
/// - x = (lon - center_lon) * cos(center_lat) * 111320
/// - y = (lat - center_lat) * 111320
///
/// Accurate to well under a meter across a district-sized span.
#[derive(Debug, Clone)]
pub struct Projector {
    center_lat: f64,
    center_lon: f64,
    cos_lat: f64,
}

impl Projector {
    /// Create a projector centered at the given (lat, lon) point
    pub fn new(center: (f64, f64)) -> Self {
        let (lat, lon) = center;
        Self {
            center_lat: lat,
            center_lon: lon,
            cos_lat: lat.to_radians().cos(),
        }
    }

    /// Create a projector centered on a bounding box
    pub fn for_bbox(bbox: &BoundingBox) -> Self {
        Self::new(bbox.center())
    }

    /// Project a lat/lon point to local meters
    ///
    /// # Returns
    /// * (x, y) in meters, centered at the projection center, y growing north
    pub fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        // Meters per degree at the equator
        const METERS_PER_DEGREE: f64 = 111320.0;

        let x = (lon - self.center_lon) * self.cos_lat * METERS_PER_DEGREE;
        let y = (lat - self.center_lat) * METERS_PER_DEGREE;

        (x, y)
    }

    /// Project a slice of lat/lon points
    pub fn project_points(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points
            .iter()
            .map(|&(lat, lon)| self.project(lat, lon))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projector_center() {
        let proj = Projector::new((37.7749, -122.4194));
        let (x, y) = proj.project(37.7749, -122.4194);
        assert!(x.abs() < 0.01);
        assert!(y.abs() < 0.01);
    }

    #[test]
    fn test_projector_1km_north() {
        let proj = Projector::new((37.7749, -122.4194));

        // 0.009 degrees of latitude is roughly 1 km
        let (_, y) = proj.project(37.7749 + 0.009, -122.4194);
        assert!((y - 1000.0).abs() < 50.0);
    }

    #[test]
    fn test_projector_axes() {
        let proj = Projector::new((37.7749, -122.4194));

        // East is positive x, north is positive y
        let (x_east, _) = proj.project(37.7749, -122.4094);
        let (_, y_north) = proj.project(37.7849, -122.4194);
        assert!(x_east > 0.0);
        assert!(y_north > 0.0);
    }
}
