use super::SceneMarker;
use crate::geometry::Viewport;
use crate::theme::palette;
use eframe::egui::{Align2, FontId, Painter, Pos2, Stroke, vec2};

/// Marker dot radius in pixels
pub const MARKER_RADIUS: f32 = 6.0;
/// Click target radius, a little forgiving around the dot
pub const HIT_RADIUS: f32 = 10.0;

/// Screen positions for the markers, in paint order
pub fn marker_positions(viewport: &Viewport, markers: &[SceneMarker]) -> Vec<Pos2> {
    markers
        .iter()
        .map(|m| viewport.to_screen(m.x, m.y))
        .collect()
}

/// Find the marker under the pointer, preferring the one drawn on top
pub fn hit_test(positions: &[Pos2], pointer: Pos2) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .rev()
        .find(|(_, pos)| pos.distance(pointer) <= HIT_RADIUS)
        .map(|(i, _)| i)
}

/// Paint the point-of-interest markers and, optionally, their labels
///
/// The active marker gets an enlarged ring, which keeps the selection
/// visible while the side panel is closed.
pub fn paint_markers(
    painter: &Painter,
    positions: &[Pos2],
    markers: &[SceneMarker],
    active: Option<usize>,
    show_labels: bool,
) {
    for (i, (marker, &pos)) in markers.iter().zip(positions).enumerate() {
        if active == Some(i) {
            painter.circle_stroke(
                pos,
                MARKER_RADIUS + 4.0,
                Stroke::new(2.0, palette::MARKER_RING),
            );
        }
        painter.circle_filled(pos, MARKER_RADIUS, palette::MARKER);
        painter.circle_filled(pos, 2.0, palette::BACKGROUND);

        if show_labels {
            painter.text(
                pos + vec2(MARKER_RADIUS + 6.0, 0.0),
                Align2::LEFT_CENTER,
                marker.poi.name,
                FontId::proportional(12.0),
                palette::LABEL,
            );
        }
    }
}
