use eframe::egui::{Pos2, Rect, pos2};

/// Bounding box in projected coordinates (meters)
#[derive(Debug, Clone)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for &(x, y) in points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        Some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Maps projected meters into a screen rectangle
///
/// The fit is uniform (one scale for both axes), centered, with a pixel
/// padding inside the rectangle. Projected y grows north, screen y grows
/// down, so the y axis is flipped here and nowhere else.
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f64,
    center_x: f64,
    center_y: f64,
    screen_center: Pos2,
}

impl Viewport {
    /// Fit bounds into a screen rectangle with the given padding
    pub fn fit(bounds: &Bounds, rect: Rect, padding: f32) -> Self {
        let usable_w = (rect.width() - 2.0 * padding).max(1.0) as f64;
        let usable_h = (rect.height() - 2.0 * padding).max(1.0) as f64;

        let scale = if bounds.width() > 0.0 && bounds.height() > 0.0 {
            (usable_w / bounds.width()).min(usable_h / bounds.height())
        } else {
            1.0
        };

        let (center_x, center_y) = bounds.center();

        Self {
            scale,
            center_x,
            center_y,
            screen_center: rect.center(),
        }
    }

    /// Map a projected point (meters) to screen coordinates
    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        pos2(
            self.screen_center.x + ((x - self.center_x) * self.scale) as f32,
            self.screen_center.y - ((y - self.center_y) * self.scale) as f32,
        )
    }

    /// Map a slice of projected points to screen coordinates
    pub fn to_screen_points(&self, points: &[(f64, f64)]) -> Vec<Pos2> {
        points.iter().map(|&(x, y)| self.to_screen(x, y)).collect()
    }

    /// Pixels per projected meter
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
