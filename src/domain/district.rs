use crate::domain::{BuildingFootprint, PointOfInterest, RoadPath};

/// Geographic bounding box in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Center point as (lat, lon)
    pub fn center(&self) -> (f64, f64) {
        ((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south && lat <= self.north && lon >= self.west && lon <= self.east
    }
}

/// A map preset: a named area with a fixed view and three curated points
#[derive(Debug)]
pub struct District {
    pub id: &'static str,
    pub name: &'static str,
    pub bbox: BoundingBox,
    pub pois: [PointOfInterest; 3],
}

impl District {
    /// Look up a preset by its id
    pub fn by_id(id: &str) -> Option<&'static District> {
        DISTRICTS.iter().find(|d| d.id == id)
    }

    pub fn default_district() -> &'static District {
        &DISTRICTS[0]
    }
}

/// Everything one fetch produces for a district, replaced wholesale
#[derive(Debug, Clone, Default)]
pub struct DistrictGeometry {
    pub roads: Vec<RoadPath>,
    pub buildings: Vec<BuildingFootprint>,
}

pub static DISTRICTS: [District; 3] = [
    District {
        id: "mission",
        name: "Mission District",
        bbox: BoundingBox {
            south: 37.7480,
            west: -122.4290,
            north: 37.7725,
            east: -122.4040,
        },
        pois: [
            PointOfInterest {
                id: "dolores-park",
                name: "Mission Dolores Park",
                category: "Park",
                lat: 37.7596,
                lon: -122.4269,
                detail: "Hillside park at the district's western edge, known for \
                         wide lawns and a clear view of the downtown skyline.",
            },
            PointOfInterest {
                id: "clarion-alley",
                name: "Clarion Alley Murals",
                category: "Public art",
                lat: 37.7626,
                lon: -122.4215,
                detail: "Narrow alley between Mission and Valencia whose walls \
                         carry a rotating collection of community murals, painted \
                         and repainted since 1992.",
            },
            PointOfInterest {
                id: "roxie-theater",
                name: "Roxie Theater",
                category: "Cinema",
                lat: 37.7649,
                lon: -122.4221,
                detail: "Independent cinema operating since 1913, one of the \
                         oldest continuously running movie theaters in the \
                         country.",
            },
        ],
    },
    District {
        id: "north-beach",
        name: "North Beach",
        bbox: BoundingBox {
            south: 37.7930,
            west: -122.4190,
            north: 37.8075,
            east: -122.4000,
        },
        pois: [
            PointOfInterest {
                id: "coit-tower",
                name: "Coit Tower",
                category: "Landmark",
                lat: 37.8024,
                lon: -122.4058,
                detail: "Slender concrete observation tower on Telegraph Hill, \
                         built in 1933 and ringed inside with Depression-era \
                         frescoes.",
            },
            PointOfInterest {
                id: "city-lights",
                name: "City Lights Booksellers",
                category: "Bookstore",
                lat: 37.7976,
                lon: -122.4066,
                detail: "Bookstore and publisher founded in 1953, a landmark of \
                         the Beat movement and still independent.",
            },
            PointOfInterest {
                id: "washington-square",
                name: "Washington Square",
                category: "Park",
                lat: 37.8005,
                lon: -122.4103,
                detail: "Flat green square at the foot of Saints Peter and Paul \
                         Church, one of the city's oldest parks.",
            },
        ],
    },
    District {
        id: "chinatown",
        name: "Chinatown",
        bbox: BoundingBox {
            south: 37.7895,
            west: -122.4125,
            north: 37.7990,
            east: -122.4020,
        },
        pois: [
            PointOfInterest {
                id: "dragon-gate",
                name: "Dragon Gate",
                category: "Landmark",
                lat: 37.7908,
                lon: -122.4057,
                detail: "Ceremonial southern entrance to Chinatown, a stone and \
                         tile gate gifted by the Republic of China in 1970.",
            },
            PointOfInterest {
                id: "portsmouth-square",
                name: "Portsmouth Square",
                category: "Plaza",
                lat: 37.7946,
                lon: -122.4053,
                detail: "Public square on the site of the original town plaza, \
                         busy from early morning with games of cards and chess.",
            },
            PointOfInterest {
                id: "fortune-cookie-factory",
                name: "Golden Gate Fortune Cookie Factory",
                category: "Bakery",
                lat: 37.7957,
                lon: -122.4078,
                detail: "Tiny Ross Alley bakery folding fortune cookies by hand \
                         on cast-iron presses since 1962.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_by_id() {
        assert_eq!(District::by_id("mission").unwrap().name, "Mission District");
        assert!(District::by_id("shangri-la").is_none());
    }

    #[test]
    fn test_default_district() {
        assert_eq!(District::default_district().id, "mission");
    }

    #[test]
    fn test_bbox_center() {
        let bbox = BoundingBox {
            south: 10.0,
            west: 20.0,
            north: 12.0,
            east: 24.0,
        };
        assert_eq!(bbox.center(), (11.0, 22.0));
    }

    #[test]
    fn test_pois_inside_their_district() {
        for district in &DISTRICTS {
            for poi in &district.pois {
                assert!(
                    district.bbox.contains(poi.lat, poi.lon),
                    "{} lies outside {}",
                    poi.id,
                    district.id
                );
            }
        }
    }

    #[test]
    fn test_district_ids_unique() {
        for (i, a) in DISTRICTS.iter().enumerate() {
            for b in &DISTRICTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
