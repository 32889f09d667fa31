// Smoothed polyline geometry for chart series.
//
// Control points follow the usual cardinal-style construction: each interior
// point gets a tangent parallel to the chord between its neighbours, split in
// proportion to the neighbouring segment lengths and scaled by `tension`.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    pub prev: DVec2,
    pub next: DVec2,
}

/// One cubic segment, ready for `bezierCurveTo`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSegment {
    pub from: DVec2,
    pub c1: DVec2,
    pub c2: DVec2,
    pub to: DVec2,
}

fn spline_at(before: DVec2, mid: DVec2, after: DVec2, tension: f64) -> ControlPoints {
    let d01 = before.distance(mid);
    let d12 = mid.distance(after);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let chord = after - before;
    ControlPoints {
        prev: mid - chord * (tension * s01),
        next: mid + chord * (tension * s12),
    }
}

/// Control points for every vertex. End vertices use themselves as the
/// missing neighbour, so their outer handle collapses onto the vertex.
pub fn control_points(points: &[DVec2], tension: f64) -> Vec<ControlPoints> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let before = points[i.saturating_sub(1)];
            let after = points[(i + 1).min(n - 1)];
            spline_at(before, points[i], after, tension)
        })
        .collect()
}

/// Keep handles inside the plot rectangle so the curve never overshoots it.
pub fn clamp_control_points(cps: &mut [ControlPoints], min: DVec2, max: DVec2) {
    for cp in cps.iter_mut() {
        cp.prev = cp.prev.clamp(min, max);
        cp.next = cp.next.clamp(min, max);
    }
}

/// Cubic segments joining consecutive points. Fewer than two points yields none.
pub fn bezier_segments(
    points: &[DVec2],
    tension: f64,
    bounds: Option<(DVec2, DVec2)>,
) -> Vec<BezierSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut cps = control_points(points, tension);
    if let Some((min, max)) = bounds {
        clamp_control_points(&mut cps, min, max);
    }
    points
        .windows(2)
        .zip(cps.windows(2))
        .map(|(p, c)| BezierSegment {
            from: p[0],
            c1: c[0].next,
            c2: c[1].prev,
            to: p[1],
        })
        .collect()
}
