// File: crates/eventline-core/src/curve.rs
// Summary: Monotone cubic interpolation (Fritsch-Carlson) emitting Bezier segments.

use crate::types::Point;

/// One cubic Bezier segment; the path's current point is the implicit start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// Interpolate a polyline with monotone cubics. Tangents are limited so the
/// curve never overshoots between consecutive samples.
/// Requires strictly increasing x; near-equal x gets an epsilon step.
pub fn monotone_cubic(points: &[Point]) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    // Secant widths and slopes per interval.
    let mut width = Vec::with_capacity(n - 1);
    let mut slope = Vec::with_capacity(n - 1);
    for w in points.windows(2) {
        let h = ((w[1].x - w[0].x) as f64).max(1e-9);
        width.push(h);
        slope.push((w[1].y - w[0].y) as f64 / h);
    }

    // Tangents: secant averages, zeroed at local extrema.
    let mut m = vec![0.0f64; n];
    m[0] = slope[0];
    m[n - 1] = slope[n - 2];
    for i in 1..n - 1 {
        m[i] = if slope[i - 1] * slope[i] <= 0.0 {
            0.0
        } else {
            (slope[i - 1] + slope[i]) / 2.0
        };
    }

    // Fritsch-Carlson limiter keeps each interval monotone.
    for i in 0..n - 1 {
        if slope[i] == 0.0 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }
        let a = m[i] / slope[i];
        let b = m[i + 1] / slope[i];
        let s = a * a + b * b;
        if s > 9.0 {
            let t = 3.0 / s.sqrt();
            m[i] = t * a * slope[i];
            m[i + 1] = t * b * slope[i];
        }
    }

    // Hermite form -> cubic Bezier control points.
    let mut out = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let h = width[i];
        let (p0, p1) = (points[i], points[i + 1]);
        out.push(CubicSegment {
            c1: Point::new(p0.x + (h / 3.0) as f32, p0.y + (m[i] * h / 3.0) as f32),
            c2: Point::new(p1.x - (h / 3.0) as f32, p1.y - (m[i + 1] * h / 3.0) as f32),
            to: p1,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f32, f32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn too_few_points_yields_no_segments() {
        assert!(monotone_cubic(&[]).is_empty());
        assert!(monotone_cubic(&pts(&[(0.0, 1.0)])).is_empty());
    }

    #[test]
    fn flat_data_stays_flat() {
        let segs = monotone_cubic(&pts(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]));
        for s in segs {
            assert_eq!(s.c1.y, 5.0);
            assert_eq!(s.c2.y, 5.0);
            assert_eq!(s.to.y, 5.0);
        }
    }

    #[test]
    fn control_points_stay_within_sample_range() {
        // Monotone increasing data: no control point may leave [y_i, y_i+1],
        // which is what prevents overshoot between samples.
        let p = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 10.0), (3.0, 11.0)]);
        let segs = monotone_cubic(&p);
        assert_eq!(segs.len(), 3);
        for (i, s) in segs.iter().enumerate() {
            let lo = p[i].y;
            let hi = p[i + 1].y;
            assert!(s.c1.y >= lo - 1e-4 && s.c1.y <= hi + 1e-4, "c1 out of range in segment {i}");
            assert!(s.c2.y >= lo - 1e-4 && s.c2.y <= hi + 1e-4, "c2 out of range in segment {i}");
        }
    }

    #[test]
    fn local_extremum_gets_zero_tangent() {
        // Peak at x=1: the outgoing control point of the next segment must not
        // rise above the peak.
        let p = pts(&[(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)]);
        let segs = monotone_cubic(&p);
        assert!(segs[0].c2.y <= 10.0 + 1e-4);
        assert!(segs[1].c1.y <= 10.0 + 1e-4);
    }
}
