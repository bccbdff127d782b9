//! Binding strand offsets to curve evaluators for the geometry kernel.

use crate::errors::ThreadError;
use crate::float_types::Real;
use crate::helix::HelixStrandSpec;
use crate::thread::form::{Side, ThreadFormSpec};
use crate::thread::profile::{ThreadStrandSet, profile};
use crate::traits::ParametricCurve;
use log::trace;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the taper is applied across a flank's strands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convergence {
    /// Each strand keeps its own radius and fades only its own horizontal offset.
    #[default]
    Strand,
    /// Every strand sits on the shared helix radius and fades its whole
    /// offset from it, so the entire cross-section grows out of a single
    /// point and shrinks back into one. Used for self-starting printed threads.
    Converging,
}

/// The ordered curves of one flank.
///
/// Strand `i` and strand `i + 1` are ruled together by the kernel, and the
/// last strand wraps around to the first. Strand counts may differ between
/// the internal and external flank of the same spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadAssembly {
    side: Side,
    helix_radius: Real,
    thread_depth: Real,
    convergence: Convergence,
    curves: Vec<HelixStrandSpec>,
}

impl ThreadAssembly {
    /// Derive the profile for `side` and bind it with [`Convergence::Strand`].
    pub fn new(spec: &ThreadFormSpec, side: Side) -> Result<Self, ThreadError> {
        let strands = profile(spec, side)?;
        Ok(Self::from_strands(spec, &strands, Convergence::Strand))
    }

    /// Like [`ThreadAssembly::new`] with an explicit convergence mode.
    pub fn with_convergence(
        spec: &ThreadFormSpec,
        side: Side,
        convergence: Convergence,
    ) -> Result<Self, ThreadError> {
        let strands = profile(spec, side)?;
        Ok(Self::from_strands(spec, &strands, convergence))
    }

    /// Bind precomputed strands to evaluators sharing the spec's pitch,
    /// height, inset, taper and domain. Strand order is preserved.
    pub fn from_strands(
        spec: &ThreadFormSpec,
        strands: &ThreadStrandSet,
        convergence: Convergence,
    ) -> Self {
        let helix_radius = strands.helix_radius;
        let curves = strands
            .strands
            .iter()
            .map(|strand| {
                let (nominal_radius, horizontal_offset) = match convergence {
                    Convergence::Strand => (strand.radius, strand.horizontal_offset),
                    Convergence::Converging => (
                        helix_radius,
                        strand.radius - helix_radius + strand.horizontal_offset,
                    ),
                };
                HelixStrandSpec {
                    nominal_radius,
                    horizontal_offset,
                    vertical_offset: strand.vertical_offset,
                    pitch: spec.pitch,
                    height: spec.height,
                    inset: spec.inset,
                    taper: spec.taper,
                    domain: spec.domain,
                }
            })
            .collect::<Vec<_>>();

        trace!(
            "bound {} {} strands ({:?}) on helix radius {}",
            curves.len(),
            strands.side,
            convergence,
            helix_radius
        );

        Self {
            side: strands.side,
            helix_radius,
            thread_depth: strands.thread_depth,
            convergence,
            curves,
        }
    }

    pub const fn side(&self) -> Side {
        self.side
    }

    /// Radius of the helix the flank was built on.
    pub const fn helix_radius(&self) -> Real {
        self.helix_radius
    }

    /// Radial depth callers size mating cores and shafts with.
    pub const fn thread_depth(&self) -> Real {
        self.thread_depth
    }

    pub const fn convergence(&self) -> Convergence {
        self.convergence
    }

    /// The evaluators in strand order.
    pub fn curves(&self) -> &[HelixStrandSpec] {
        &self.curves
    }

    pub fn strand(&self, index: usize) -> Option<&HelixStrandSpec> {
        self.curves.get(index)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Index pairs of strands to rule together, wrapping the last back to the first.
    pub fn ruled_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.curves.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }

    /// Evaluate every strand at the same `t`.
    pub fn points_at(&self, t: Real) -> Vec<Point3<Real>> {
        self.curves.iter().map(|curve| curve.evaluate(t)).collect()
    }

    /// Sample every strand at `count + 1` uniform parameters over the domain.
    ///
    /// Row `i` holds strand `i`'s points; column `j` is the same `t` on every
    /// strand, which is what ruling two strands together needs.
    #[cfg(not(feature = "parallel"))]
    pub fn sample(&self, count: usize) -> Vec<Vec<Point3<Real>>> {
        self.curves.iter().map(|curve| curve.sample(count)).collect()
    }

    /// Sample every strand at `count + 1` uniform parameters over the domain.
    ///
    /// Row `i` holds strand `i`'s points; column `j` is the same `t` on every
    /// strand, which is what ruling two strands together needs.
    #[cfg(feature = "parallel")]
    pub fn sample(&self, count: usize) -> Vec<Vec<Point3<Real>>> {
        self.curves
            .par_iter()
            .map(|curve| curve.par_sample(count))
            .collect()
    }
}
