//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use helical_threads::{
    Cutoff, ThreadFormSpec,
    float_types::Real,
};
use nalgebra::Point2;

/// Tolerance for the clearance invariants.
#[cfg(feature = "f64")]
pub const CLEARANCE_TOL: Real = 1e-9;
#[cfg(feature = "f32")]
pub const CLEARANCE_TOL: Real = 1e-4;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Perpendicular distance from `point` to the infinite line through `a` and `b`.
pub fn perpendicular_distance(point: Point2<Real>, a: Point2<Real>, b: Point2<Real>) -> Real {
    let dir = b - a;
    let rel = point - a;
    (dir.x * rel.y - dir.y * rel.x).abs() / dir.norm()
}

/// `true` when segments `p1-p2` and `q1-q2` properly cross.
pub fn segments_cross(p1: Point2<Real>, p2: Point2<Real>, q1: Point2<Real>, q2: Point2<Real>) -> bool {
    let orient = |a: Point2<Real>, b: Point2<Real>, c: Point2<Real>| {
        let ab = b - a;
        let ac = c - a;
        ab.x * ac.y - ab.y * ac.x
    };
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Signed shoelace area of a closed polygon.
pub fn signed_area(points: &[Point2<Real>]) -> Real {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum::<Real>()
        / 2.0
}

/// `true` when no two non-adjacent edges of the closed polygon cross.
pub fn is_simple_polygon(points: &[Point2<Real>]) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            if segments_cross(points[i], points[(i + 1) % n], points[j], points[(j + 1) % n]) {
                return false;
            }
        }
    }
    true
}

/// Reference thread for the clearance checks: 2 mm pitch, 90° flanks, radius 8.
pub fn clearance_spec(major: Real, minor: Real, ext_clearance: Real, thread_overlap: Real) -> ThreadFormSpec {
    ThreadFormSpec::new(2.0, 8.0)
        .with_flank_angle(90.0)
        .with_cutoffs(Cutoff::Width(major), Cutoff::Width(minor))
        .with_ext_clearance(ext_clearance)
        .with_thread_overlap(thread_overlap)
        .with_inset(0.0)
        .with_height(4.0)
}

/// Every combination of {no, pitch/8} major cutoff, {no, pitch/4} minor cutoff,
/// {0, 0.05} clearance and {0, 0.001} overlap, over a few pitches and flank angles.
pub fn spec_grid() -> Vec<ThreadFormSpec> {
    let mut specs = Vec::new();
    for angle in [29.0, 60.0, 90.0, 120.0] {
        for (pitch, radius) in [(2.0, 8.0), (1.25, 4.0), (25.4 / 20.0, 3.175)] {
            for major in [0.0, pitch / 8.0] {
                for minor in [0.0, pitch / 4.0] {
                    for clearance in [0.0, 0.05, 0.1] {
                        for overlap in [0.0, 0.001] {
                            specs.push(
                                ThreadFormSpec::new(pitch, radius)
                                    .with_flank_angle(angle)
                                    .with_cutoffs(Cutoff::Width(major), Cutoff::Width(minor))
                                    .with_ext_clearance(clearance)
                                    .with_thread_overlap(overlap),
                            );
                        }
                    }
                }
            }
        }
    }
    specs
}
