use crate::api::{Element, OverpassResponse};
use crate::domain::{BuildingFootprint, DistrictGeometry, RoadClass, RoadPath};
use log::{debug, warn};

/// Hard cap on buildings kept per district
pub const MAX_RENDERED_BUILDINGS: usize = 4000;

fn way_points(element: &Element) -> Option<Vec<(f64, f64)>> {
    let geometry = element.geometry.as_ref()?;
    Some(geometry.iter().map(|p| (p.lat, p.lon)).collect())
}

fn is_closed_ring(points: &[(f64, f64)]) -> bool {
    if points.len() < 3 {
        return false;
    }
    let first = points[0];
    let last = points[points.len() - 1];
    (first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9
}

/// Parse Overpass response into road polylines
///
/// Every way with a `highway` tag and inline geometry becomes one road.
/// Points are copied in the order the way listed them, count untouched;
/// the highway value picks the stroke class.
pub fn parse_roads(response: &OverpassResponse) -> Vec<RoadPath> {
    let mut roads = Vec::new();

    for element in &response.elements {
        if element.type_ != "way" {
            continue;
        }

        let tags = match &element.tags {
            Some(t) => t,
            None => continue,
        };

        let highway = match tags.get("highway") {
            Some(h) => h,
            None => continue,
        };

        let points = match way_points(element) {
            Some(p) => p,
            None => continue,
        };

        roads.push(RoadPath::new(points, RoadClass::from_highway_tag(highway)));
    }

    roads
}

/// Parse Overpass response into closed building footprints
///
/// Every way with a `building` tag, inline geometry, and at least three
/// distinct points becomes one footprint. Outlines are normalized so the
/// first and last points are equal: an open ring gets its first point
/// appended, an already-closed ring is kept as it came. The output is
/// capped at [`MAX_RENDERED_BUILDINGS`].
pub fn parse_buildings(response: &OverpassResponse) -> Vec<BuildingFootprint> {
    let mut buildings = Vec::new();

    for element in &response.elements {
        if element.type_ != "way" {
            continue;
        }

        let tags = match &element.tags {
            Some(t) => t,
            None => continue,
        };

        if !tags.contains_key("building") {
            continue;
        }

        let mut points = match way_points(element) {
            Some(p) => p,
            None => continue,
        };

        // Normalize to an open ring, then close it
        if is_closed_ring(&points) {
            points.pop();
        }
        if points.len() < 3 {
            continue;
        }
        points.push(points[0]);

        if buildings.len() == MAX_RENDERED_BUILDINGS {
            warn!(
                "building cap of {} reached, dropping the remainder",
                MAX_RENDERED_BUILDINGS
            );
            break;
        }

        buildings.push(BuildingFootprint::new(points));
    }

    buildings
}

/// Partition one response into the full geometry set for a district
pub fn parse_district(response: &OverpassResponse) -> DistrictGeometry {
    let roads = parse_roads(response);
    let buildings = parse_buildings(response);

    debug!(
        "parsed {} roads and {} buildings from {} elements",
        roads.len(),
        buildings.len(),
        response.elements.len()
    );

    DistrictGeometry { roads, buildings }
}
