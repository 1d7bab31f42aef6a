/// Road classification based on OSM highway tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadClass {
    Motorway,
    Primary,
    Secondary,
    Tertiary,
    Residential,
    Minor,
}

impl RoadClass {
    /// Classify a highway tag value into a RoadClass
    ///
    /// Classification is total: values outside the named tiers (footways,
    /// cycleways, service alleys) fall into `Minor` so every highway way
    /// in a response stays drawable.
    pub fn from_highway_tag(tag: &str) -> RoadClass {
        match tag {
            "motorway" | "motorway_link" => RoadClass::Motorway,
            "trunk" | "trunk_link" | "primary" | "primary_link" => RoadClass::Primary,
            "secondary" | "secondary_link" => RoadClass::Secondary,
            "tertiary" | "tertiary_link" => RoadClass::Tertiary,
            "residential" | "living_street" | "unclassified" => RoadClass::Residential,
            _ => RoadClass::Minor,
        }
    }

    /// Painting order, least prominent first so major roads draw on top
    pub const DRAW_ORDER: [RoadClass; 6] = [
        RoadClass::Minor,
        RoadClass::Residential,
        RoadClass::Tertiary,
        RoadClass::Secondary,
        RoadClass::Primary,
        RoadClass::Motorway,
    ];
}

/// A road polyline with coordinates and classification
#[derive(Debug, Clone)]
pub struct RoadPath {
    /// Points as (lat, lon) pairs in WGS84, in the order the way listed them
    pub points: Vec<(f64, f64)>,
    /// Road classification, used only for stroke styling
    pub class: RoadClass,
}

impl RoadPath {
    pub fn new(points: Vec<(f64, f64)>, class: RoadClass) -> Self {
        Self { points, class }
    }
}
