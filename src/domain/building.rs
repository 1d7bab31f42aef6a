/// A building footprint as a closed outline
///
/// The outline is stored as (lat, lon) pairs whose first and last points
/// are equal. Parsing guarantees closure before construction.
#[derive(Debug, Clone)]
pub struct BuildingFootprint {
    pub outline: Vec<(f64, f64)>,
}

impl BuildingFootprint {
    pub fn new(outline: Vec<(f64, f64)>) -> Self {
        Self { outline }
    }
}
