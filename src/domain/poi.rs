/// A curated point of interest overlaid on the map
///
/// Points are defined statically per district and never change at runtime;
/// the detail text is what the side panel shows when the point is active.
#[derive(Debug, Clone, Copy)]
pub struct PointOfInterest {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub detail: &'static str,
}
