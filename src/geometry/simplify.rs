use geo::{LineString, Simplify};

/// Ramer-Douglas-Peucker simplification of a building outline
///
/// Operates in projected meters with a tolerance in meters. The endpoints
/// survive simplification, so a closed outline (first == last) stays
/// closed. Falls back to the original outline when simplification would
/// leave too few points to still be a polygon.
pub fn simplify_outline(outline: &[(f64, f64)], epsilon_m: f64) -> Vec<(f64, f64)> {
    if outline.len() < 5 {
        return outline.to_vec();
    }

    let line: LineString<f64> = outline
        .iter()
        .map(|&(x, y)| geo::coord! { x: x, y: y })
        .collect();

    let simplified: Vec<(f64, f64)> = line
        .simplify(&epsilon_m)
        .0
        .into_iter()
        .map(|c| (c.x, c.y))
        .collect();

    if simplified.len() < 4 {
        return outline.to_vec();
    }

    simplified
}

/// Pick a simplification tolerance from the district span
///
/// Wider views map more meters to a pixel, so they tolerate a coarser
/// outline. Values are meters.
pub fn epsilon_for_span(span_m: f64) -> f64 {
    if span_m < 1500.0 {
        0.5
    } else if span_m < 3000.0 {
        1.0
    } else if span_m < 6000.0 {
        2.0
    } else {
        4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_short_outline_unchanged() {
        let triangle = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)];
        let result = simplify_outline(&triangle, 1.0);
        assert_eq!(result, triangle);
    }

    #[test]
    fn test_simplify_drops_collinear_jitter() {
        // A square outline with sub-tolerance wobble along the bottom edge
        let mut outline = vec![(0.0, 0.0)];
        for i in 1..20 {
            let x = i as f64 * 5.0;
            let y = if i % 2 == 0 { 0.0 } else { 0.05 };
            outline.push((x, y));
        }
        outline.push((100.0, 0.0));
        outline.push((100.0, 100.0));
        outline.push((0.0, 100.0));
        outline.push((0.0, 0.0));

        let result = simplify_outline(&outline, 0.5);
        assert!(result.len() < outline.len());
        assert!(result.len() >= 4);
    }

    #[test]
    fn test_simplified_outline_stays_closed() {
        let mut outline = vec![(0.0, 0.0)];
        for i in 1..30 {
            let x = i as f64 * 2.0;
            let y = if i % 2 == 0 { 0.0 } else { 0.1 };
            outline.push((x, y));
        }
        outline.push((60.0, 40.0));
        outline.push((0.0, 40.0));
        outline.push((0.0, 0.0));

        let result = simplify_outline(&outline, 0.5);
        assert_eq!(result.first(), result.last());
    }

    #[test]
    fn test_epsilon_for_span() {
        assert_eq!(epsilon_for_span(1000.0), 0.5);
        assert_eq!(epsilon_for_span(2500.0), 1.0);
        assert_eq!(epsilon_for_span(4000.0), 2.0);
        assert_eq!(epsilon_for_span(9000.0), 4.0);
    }
}
