pub mod buildings;
pub mod markers;
pub mod roads;

pub use buildings::paint_buildings;
pub use markers::{hit_test, marker_positions, paint_markers};
pub use roads::{RoadStyles, paint_roads};

use crate::domain::{District, DistrictGeometry, PointOfInterest, RoadClass};
use crate::geometry::{Bounds, Projector, simplify};

/// A road ready to paint: projected points plus its stroke class
pub struct ScenePath {
    pub points: Vec<(f64, f64)>,
    pub class: RoadClass,
}

/// A building outline in projected meters, still closed
pub struct SceneRing {
    pub outline: Vec<(f64, f64)>,
}

/// A point of interest with its projected position
pub struct SceneMarker {
    pub poi: &'static PointOfInterest,
    pub x: f64,
    pub y: f64,
}

/// Everything the canvas paints, projected once per applied fetch
///
/// Bounds come from the district's bounding box rather than from the
/// geometry, so the framing is stable while a fetch is still pending or
/// has failed.
pub struct Scene {
    pub roads: Vec<ScenePath>,
    pub buildings: Vec<SceneRing>,
    pub markers: Vec<SceneMarker>,
    pub bounds: Bounds,
}

/// Project a district's geometry into a paintable scene
///
/// Roads are projected verbatim. Building outlines are optionally
/// simplified in meters with a tolerance picked from the district span;
/// the closing point survives simplification.
pub fn build_scene(
    geometry: &DistrictGeometry,
    district: &'static District,
    simplify_buildings: bool,
) -> Scene {
    let projector = Projector::for_bbox(&district.bbox);

    let (min_x, min_y) = projector.project(district.bbox.south, district.bbox.west);
    let (max_x, max_y) = projector.project(district.bbox.north, district.bbox.east);
    let bounds = Bounds {
        min_x,
        max_x,
        min_y,
        max_y,
    };

    let epsilon = simplify::epsilon_for_span(bounds.width().max(bounds.height()));

    let roads = geometry
        .roads
        .iter()
        .map(|road| ScenePath {
            points: projector.project_points(&road.points),
            class: road.class,
        })
        .collect();

    let buildings = geometry
        .buildings
        .iter()
        .map(|building| {
            let outline = projector.project_points(&building.outline);
            let outline = if simplify_buildings {
                simplify::simplify_outline(&outline, epsilon)
            } else {
                outline
            };
            SceneRing { outline }
        })
        .collect();

    let markers = district
        .pois
        .iter()
        .map(|poi| {
            let (x, y) = projector.project(poi.lat, poi.lon);
            SceneMarker { poi, x, y }
        })
        .collect();

    Scene {
        roads,
        buildings,
        markers,
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BuildingFootprint, RoadPath};

    fn mission() -> &'static District {
        District::by_id("mission").unwrap()
    }

    #[test]
    fn test_empty_geometry_still_yields_markers_and_bounds() {
        let scene = build_scene(&DistrictGeometry::default(), mission(), true);

        assert!(scene.roads.is_empty());
        assert!(scene.buildings.is_empty());
        assert_eq!(scene.markers.len(), 3);
        assert!(scene.bounds.width() > 0.0);
        assert!(scene.bounds.height() > 0.0);
    }

    #[test]
    fn test_roads_projected_verbatim() {
        let geometry = DistrictGeometry {
            roads: vec![RoadPath::new(
                vec![
                    (37.7600, -122.4100),
                    (37.7610, -122.4095),
                    (37.7605, -122.4090),
                ],
                RoadClass::Primary,
            )],
            buildings: Vec::new(),
        };

        let scene = build_scene(&geometry, mission(), true);
        assert_eq!(scene.roads.len(), 1);
        assert_eq!(scene.roads[0].points.len(), 3);
        assert_eq!(scene.roads[0].class, RoadClass::Primary);
    }

    #[test]
    fn test_simplified_building_stays_closed() {
        // A block-sized ring with sub-meter jitter along one edge
        let mut outline = Vec::new();
        for i in 0..=20 {
            let lat = 37.7600 + i as f64 * 0.00005;
            let lon = -122.4100 + if i % 2 == 0 { 0.0 } else { 0.000002 };
            outline.push((lat, lon));
        }
        outline.push((37.7610, -122.4090));
        outline.push((37.7600, -122.4090));
        outline.push((37.7600, -122.4100));
        let original_len = outline.len();

        let geometry = DistrictGeometry {
            roads: Vec::new(),
            buildings: vec![BuildingFootprint::new(outline)],
        };

        let scene = build_scene(&geometry, mission(), true);
        let ring = &scene.buildings[0].outline;
        assert!(ring.len() < original_len);
        assert!(ring.len() >= 4);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_markers_inside_bounds() {
        let scene = build_scene(&DistrictGeometry::default(), mission(), false);

        for marker in &scene.markers {
            assert!(marker.x >= scene.bounds.min_x && marker.x <= scene.bounds.max_x);
            assert!(marker.y >= scene.bounds.min_y && marker.y <= scene.bounds.max_y);
        }
    }
}
