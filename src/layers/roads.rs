use super::ScenePath;
use crate::domain::RoadClass;
use crate::geometry::Viewport;
use crate::theme::palette;
use eframe::egui::{Color32, Painter, Shape, Stroke};

/// Stroke width and color per road class
#[derive(Debug, Clone)]
pub struct RoadStyles {
    pub motorway: (f32, Color32),
    pub primary: (f32, Color32),
    pub secondary: (f32, Color32),
    pub tertiary: (f32, Color32),
    pub residential: (f32, Color32),
    pub minor: (f32, Color32),
}

impl Default for RoadStyles {
    fn default() -> Self {
        Self {
            motorway: (3.5, palette::ROAD_MOTORWAY),
            primary: (2.5, palette::ROAD_PRIMARY),
            secondary: (2.0, palette::ROAD_SECONDARY),
            tertiary: (1.5, palette::ROAD_TERTIARY),
            residential: (1.2, palette::ROAD_RESIDENTIAL),
            minor: (0.9, palette::ROAD_MINOR),
        }
    }
}

impl RoadStyles {
    pub fn stroke_for(&self, class: RoadClass) -> Stroke {
        let (width, color) = match class {
            RoadClass::Motorway => self.motorway,
            RoadClass::Primary => self.primary,
            RoadClass::Secondary => self.secondary,
            RoadClass::Tertiary => self.tertiary,
            RoadClass::Residential => self.residential,
            RoadClass::Minor => self.minor,
        };
        Stroke::new(width, color)
    }
}

/// Paint all roads, least prominent class first so major roads sit on top
pub fn paint_roads(
    painter: &Painter,
    viewport: &Viewport,
    roads: &[ScenePath],
    styles: &RoadStyles,
) {
    for class in RoadClass::DRAW_ORDER {
        let stroke = styles.stroke_for(class);
        for road in roads.iter().filter(|r| r.class == class) {
            if road.points.len() < 2 {
                continue;
            }
            painter.add(Shape::line(
                viewport.to_screen_points(&road.points),
                stroke,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_widths_descend_with_class() {
        let styles = RoadStyles::default();
        let motorway = styles.stroke_for(RoadClass::Motorway).width;
        let residential = styles.stroke_for(RoadClass::Residential).width;
        let minor = styles.stroke_for(RoadClass::Minor).width;

        assert!(motorway > residential);
        assert!(residential > minor);
    }
}
