use super::SceneRing;
use crate::geometry::Viewport;
use crate::theme::palette;
use eframe::egui::{Mesh, Painter, Shape, Stroke};
use earcutr::earcut;

/// Triangulate an open ring into earcut index triples
fn triangulate_ring(ring: &[(f64, f64)]) -> Vec<usize> {
    if ring.len() < 3 {
        return Vec::new();
    }

    let mut vertices: Vec<f64> = Vec::with_capacity(ring.len() * 2);
    for &(x, y) in ring {
        vertices.push(x);
        vertices.push(y);
    }

    earcut(&vertices, &[], 2).unwrap_or_default()
}

/// Paint building footprints: filled interiors first, then faint outlines
///
/// All fills share one mesh, so the layer stays a single draw call even
/// at the building cap. Footprints arrive closed; the closing point is
/// dropped before tessellation.
pub fn paint_buildings(painter: &Painter, viewport: &Viewport, buildings: &[SceneRing]) {
    let mut mesh = Mesh::default();

    for building in buildings {
        let Some((_, open)) = building.outline.split_last() else {
            continue;
        };
        if open.len() < 3 {
            continue;
        }

        let indices = triangulate_ring(open);
        if indices.is_empty() {
            continue;
        }

        let base = mesh.vertices.len() as u32;
        for &(x, y) in open {
            mesh.colored_vertex(viewport.to_screen(x, y), palette::BUILDING_FILL);
        }
        for triangle in indices.chunks_exact(3) {
            mesh.add_triangle(
                base + triangle[0] as u32,
                base + triangle[1] as u32,
                base + triangle[2] as u32,
            );
        }
    }

    if !mesh.is_empty() {
        painter.add(Shape::mesh(mesh));
    }

    let stroke = Stroke::new(1.0, palette::BUILDING_OUTLINE);
    for building in buildings {
        if building.outline.len() < 4 {
            continue;
        }
        let open = &building.outline[..building.outline.len() - 1];
        painter.add(Shape::closed_line(viewport.to_screen_points(open), stroke));
    }
}
