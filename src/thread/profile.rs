//! Thread profile dimensioning.
//!
//! From a [`ThreadFormSpec`] derive the 3 or 4 strands whose ruled surfaces
//! form one flank of an internal or external thread. Strands are ordered
//! root `-`, root `+`, tip `+`, then tip `-` when the tip has a flat.
//!
//! All offsets are measured in the cross-section plane through the axis:
//! `radius + horizontal_offset` is the strand's distance from the axis at full
//! taper and `vertical_offset` its height relative to the helix.

use crate::errors::ThreadError;
use crate::float_types::{Real, tolerance};
use crate::thread::form::{Side, ThreadFormSpec};
use log::debug;
use nalgebra::Point2;

/// Location of one strand in the flank cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrandOffset {
    pub radius: Real,
    pub horizontal_offset: Real,
    pub vertical_offset: Real,
}

impl StrandOffset {
    pub const fn new(radius: Real, horizontal_offset: Real, vertical_offset: Real) -> Self {
        Self {
            radius,
            horizontal_offset,
            vertical_offset,
        }
    }

    /// Distance from the axis once the offset is fully faded in.
    #[inline]
    pub const fn reach(&self) -> Real {
        self.radius + self.horizontal_offset
    }

    /// `(reach, vertical_offset)` in the cross-section plane.
    #[inline]
    pub const fn to_point(&self) -> Point2<Real> {
        Point2::new(self.reach(), self.vertical_offset)
    }
}

/// The strands of one flank plus the scalars callers size mating parts with.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadStrandSet {
    pub side: Side,
    /// Radius of the helix the flank is built on.
    pub helix_radius: Real,
    /// Radial depth from root to tip.
    pub thread_depth: Real,
    pub strands: Vec<StrandOffset>,
}

impl ThreadStrandSet {
    pub fn len(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    /// Three strands: the tip comes to a point.
    pub fn is_triangular(&self) -> bool {
        self.strands.len() == 3
    }

    /// Four strands: the tip has a flat.
    pub fn is_trapezoidal(&self) -> bool {
        self.strands.len() == 4
    }

    /// The flank polygon in strand order.
    pub fn cross_section(&self) -> Vec<Point2<Real>> {
        self.strands.iter().map(StrandOffset::to_point).collect()
    }

    /// Reject anything the geometry kernel could not rule into a closed flank.
    ///
    /// A strand may land on the axis up to [`tolerance`] of rounding; anything
    /// further inside is an error.
    fn check(self) -> Result<Self, ThreadError> {
        let count = self.strands.len();
        if !(3..=4).contains(&count) {
            return Err(ThreadError::StrandCount {
                side: self.side,
                count,
            });
        }
        for (index, strand) in self.strands.iter().enumerate() {
            let radius = strand.radius.min(strand.reach());
            if radius < -tolerance() {
                return Err(ThreadError::NegativeRadius {
                    side: self.side,
                    index,
                    radius,
                });
            }
        }
        Ok(self)
    }
}

/// Intermediate quantities of the derivation.
///
/// Returned as data so callers can inspect how a profile came about; the
/// strand sets are built from these and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDimensions {
    pub major_cutoff: Real,
    pub minor_cutoff: Real,
    pub tan_half: Real,
    pub sin_half: Real,
    /// Radial distance from the profile's sharp tip to the major flat.
    pub tip_to_major_cutoff: Real,
    /// Radial distance from the profile's sharp tip to the minor flat.
    pub tip_to_minor_cutoff: Real,
    pub internal_thread_depth: Real,
    /// Vertical growth of a flank pushed `thread_overlap` into its core.
    pub overlap_vert_adj: Real,
    /// Internal root half height at the helix radius, overlap included.
    pub int_root_half_height: Real,
    pub int_tip_half_height: Real,
    /// Vertical shift that moves the external flank `ext_clearance` off the internal one.
    pub ext_vert_adj: Real,
    pub ext_helix_radius: Real,
    pub ext_root_half_height: Real,
    /// External root half height with the overlap adjustment.
    pub ext_root_half_height_adj: Real,
    pub ext_tip_half_height: Real,
    pub ext_thread_depth: Real,
    /// The external tip flat vanished and the external profile is triangular.
    pub ext_collapsed: bool,
}

impl ProfileDimensions {
    /// **Thread profile derivation**
    ///
    /// ```text
    /// tip_to_major_cutoff   = ((pitch - major_cutoff)/2) / tan(half)
    /// tip_to_minor_cutoff   = (minor_cutoff/2) / tan(half)
    /// internal_thread_depth = tip_to_major_cutoff - tip_to_minor_cutoff
    /// overlap_vert_adj      = thread_overlap·tan(half)
    ///
    /// hyp              = ext_clearance / sin(half)
    /// ext_vert_adj     = (hyp - ext_clearance)·tan(half)
    /// ext_helix_radius = major_radius - internal_thread_depth - ext_clearance
    /// ext_root_half    = (pitch - minor_cutoff)/2 - ext_vert_adj
    /// ext_tip_half     = major_cutoff/2 - ext_vert_adj
    /// ```
    ///
    /// When `ext_tip_half < 0` the external tip flat cannot hold the clearance:
    /// it is clamped to 0 and the external depth recomputed as
    /// `ext_root_half / tan(half)`, collapsing the external profile to a
    /// triangle even when the internal one keeps its flat.
    pub fn new(spec: &ThreadFormSpec) -> Result<Self, ThreadError> {
        spec.validate()?;

        let pitch = spec.pitch;
        let major_cutoff = spec.major_cutoff_width()?;
        let minor_cutoff = spec.minor_cutoff_width()?;

        let half = spec.half_angle();
        let tan_half = half.tan();
        let sin_half = half.sin();

        let tip_to_major_cutoff = ((pitch - major_cutoff) / 2.0) / tan_half;
        let tip_to_minor_cutoff = (minor_cutoff / 2.0) / tan_half;
        let internal_thread_depth = tip_to_major_cutoff - tip_to_minor_cutoff;
        let overlap_vert_adj = spec.thread_overlap * tan_half;

        let int_root_half_height = (pitch - major_cutoff) / 2.0 + overlap_vert_adj;
        let int_tip_half_height = minor_cutoff / 2.0;

        // hyp: hypotenuse of the triangle formed by a radial line, the tip of
        // the internal thread and the tip of the external thread.
        let hyp = spec.ext_clearance / sin_half;
        let ext_vert_adj = (hyp - spec.ext_clearance) * tan_half;

        let ext_helix_radius = spec.major_radius - internal_thread_depth - spec.ext_clearance;
        let ext_root_half_height = ((pitch - minor_cutoff) / 2.0) - ext_vert_adj;
        if ext_root_half_height <= 0.0 {
            return Err(ThreadError::ClearanceTooLarge {
                clearance: spec.ext_clearance,
                root_half_height: ext_root_half_height,
            });
        }
        let ext_root_half_height_adj = ext_root_half_height + overlap_vert_adj;

        let mut ext_tip_half_height = (major_cutoff / 2.0) - ext_vert_adj;
        let mut ext_thread_depth = internal_thread_depth;
        let ext_collapsed = ext_tip_half_height < 0.0;
        if ext_collapsed {
            // Clearance from the external tip to the internal core ends up
            // ext_clearance / sin(half) here, not ext_clearance.
            debug!(
                "external tip half height {ext_tip_half_height} < 0 (major_cutoff={major_cutoff}, ext_vert_adj={ext_vert_adj}); collapsing to triangular"
            );
            ext_tip_half_height = 0.0;
            ext_thread_depth = ext_root_half_height / tan_half;
        }

        let dims = Self {
            major_cutoff,
            minor_cutoff,
            tan_half,
            sin_half,
            tip_to_major_cutoff,
            tip_to_minor_cutoff,
            internal_thread_depth,
            overlap_vert_adj,
            int_root_half_height,
            int_tip_half_height,
            ext_vert_adj,
            ext_helix_radius,
            ext_root_half_height,
            ext_root_half_height_adj,
            ext_tip_half_height,
            ext_thread_depth,
            ext_collapsed,
        };
        debug!("profile dimensions: {dims:?}");
        Ok(dims)
    }

    /// Internal strands, helix on the major radius.
    pub fn internal(&self, spec: &ThreadFormSpec) -> Result<ThreadStrandSet, ThreadError> {
        let helix_radius = spec.major_radius;
        let root_radius = helix_radius + spec.thread_overlap;
        let depth = self.internal_thread_depth;

        let mut strands = vec![
            StrandOffset::new(root_radius, 0.0, -self.int_root_half_height),
            StrandOffset::new(root_radius, 0.0, self.int_root_half_height),
            StrandOffset::new(helix_radius, -depth, self.int_tip_half_height),
        ];
        if self.minor_cutoff > 0.0 {
            strands.push(StrandOffset::new(helix_radius, -depth, -self.int_tip_half_height));
        }

        ThreadStrandSet {
            side: Side::Internal,
            helix_radius,
            thread_depth: depth,
            strands,
        }
        .check()
    }

    /// External strands, helix on the clearance-adjusted minor radius.
    pub fn external(&self, spec: &ThreadFormSpec) -> Result<ThreadStrandSet, ThreadError> {
        let helix_radius = self.ext_helix_radius;
        let root_radius = helix_radius - spec.thread_overlap;
        let depth = self.ext_thread_depth;

        let mut strands = vec![
            StrandOffset::new(root_radius, 0.0, -self.ext_root_half_height_adj),
            StrandOffset::new(root_radius, 0.0, self.ext_root_half_height_adj),
            StrandOffset::new(helix_radius, depth, self.ext_tip_half_height),
        ];
        if self.ext_tip_half_height > 0.0 {
            strands.push(StrandOffset::new(helix_radius, depth, -self.ext_tip_half_height));
        }

        ThreadStrandSet {
            side: Side::External,
            helix_radius,
            thread_depth: depth,
            strands,
        }
        .check()
    }

    pub fn strands(&self, spec: &ThreadFormSpec, side: Side) -> Result<ThreadStrandSet, ThreadError> {
        match side {
            Side::Internal => self.internal(spec),
            Side::External => self.external(spec),
        }
    }
}

/// Derive the strands of one flank.
pub fn profile(spec: &ThreadFormSpec, side: Side) -> Result<ThreadStrandSet, ThreadError> {
    ProfileDimensions::new(spec)?.strands(spec, side)
}

/// Both flanks of a mating pair, derived from the same spec.
#[derive(Debug, Clone, PartialEq)]
pub struct HelicalThreads {
    pub spec: ThreadFormSpec,
    pub dimensions: ProfileDimensions,
    pub internal: ThreadStrandSet,
    pub external: ThreadStrandSet,
}

impl HelicalThreads {
    pub fn new(spec: &ThreadFormSpec) -> Result<Self, ThreadError> {
        let dimensions = ProfileDimensions::new(spec)?;
        Ok(Self {
            spec: *spec,
            internal: dimensions.internal(spec)?,
            external: dimensions.external(spec)?,
            dimensions,
        })
    }

    pub fn side(&self, side: Side) -> &ThreadStrandSet {
        match side {
            Side::Internal => &self.internal,
            Side::External => &self.external,
        }
    }
}

/// Compute internal and external flanks together.
pub fn helical_threads(spec: &ThreadFormSpec) -> Result<HelicalThreads, ThreadError> {
    HelicalThreads::new(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::form::Cutoff;
    use approx::assert_abs_diff_eq;

    fn spec(major: Real, minor: Real, clearance: Real, overlap: Real) -> ThreadFormSpec {
        ThreadFormSpec::new(2.0, 8.0)
            .with_cutoffs(Cutoff::Width(major), Cutoff::Width(minor))
            .with_ext_clearance(clearance)
            .with_thread_overlap(overlap)
    }

    #[test]
    fn trapezoidal_internal_strands() {
        let set = profile(&spec(0.25, 0.5, 0.05, 0.001), Side::Internal).unwrap();
        assert!(set.is_trapezoidal());
        assert_eq!(set.helix_radius, 8.0);
        assert_abs_diff_eq!(set.thread_depth, 0.625, epsilon = 1e-12);

        let s = &set.strands;
        assert_abs_diff_eq!(s[0].radius, 8.001, epsilon = 1e-12);
        assert_abs_diff_eq!(s[0].vertical_offset, -0.876, epsilon = 1e-12);
        assert_abs_diff_eq!(s[1].vertical_offset, 0.876, epsilon = 1e-12);
        assert_eq!(s[0].horizontal_offset, 0.0);
        assert_eq!(s[2].radius, 8.0);
        assert_abs_diff_eq!(s[2].horizontal_offset, -0.625, epsilon = 1e-12);
        assert_abs_diff_eq!(s[2].vertical_offset, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(s[3].vertical_offset, -0.25, epsilon = 1e-12);
    }

    #[test]
    fn trapezoidal_external_strands() {
        let set = profile(&spec(0.25, 0.5, 0.05, 0.001), Side::External).unwrap();
        assert!(set.is_trapezoidal());
        assert_abs_diff_eq!(set.helix_radius, 7.325, epsilon = 1e-12);
        assert_abs_diff_eq!(set.thread_depth, 0.625, epsilon = 1e-12);

        let s = &set.strands;
        assert_abs_diff_eq!(s[0].radius, 7.324, epsilon = 1e-12);
        assert_abs_diff_eq!(s[0].vertical_offset, -0.7302893218813452, epsilon = 1e-12);
        assert_abs_diff_eq!(s[1].vertical_offset, 0.7302893218813452, epsilon = 1e-12);
        assert_abs_diff_eq!(s[2].horizontal_offset, 0.625, epsilon = 1e-12);
        assert_abs_diff_eq!(s[2].vertical_offset, 0.10428932188134524, epsilon = 1e-12);
        assert_abs_diff_eq!(s[3].vertical_offset, -0.10428932188134524, epsilon = 1e-12);
    }

    #[test]
    fn triangular_without_minor_cutoff() {
        let set = profile(&spec(0.25, 0.0, 0.05, 0.001), Side::Internal).unwrap();
        assert!(set.is_triangular());
        assert_eq!(set.strands[2].vertical_offset, 0.0);
    }

    #[test]
    fn external_collapses_without_major_cutoff() {
        let s = spec(0.0, 0.5, 0.05, 0.0);
        let dims = ProfileDimensions::new(&s).unwrap();
        assert!(dims.ext_collapsed);
        assert_eq!(dims.ext_tip_half_height, 0.0);
        assert_abs_diff_eq!(
            dims.ext_thread_depth,
            dims.ext_root_half_height / dims.tan_half,
            epsilon = 1e-12
        );

        let threads = helical_threads(&s).unwrap();
        assert!(threads.internal.is_trapezoidal());
        assert!(threads.external.is_triangular());
    }

    #[test]
    fn zero_clearance_never_collapses() {
        let dims = ProfileDimensions::new(&spec(0.0, 0.0, 0.0, 0.0)).unwrap();
        assert!(!dims.ext_collapsed);
        assert_eq!(dims.ext_vert_adj, 0.0);
        assert_eq!(dims.ext_thread_depth, dims.internal_thread_depth);
    }

    #[test]
    fn clearance_too_large() {
        let s = spec(0.25, 0.5, 5.0, 0.0);
        assert!(matches!(
            ProfileDimensions::new(&s),
            Err(ThreadError::ClearanceTooLarge { .. })
        ));
    }

    #[test]
    fn tiny_bolt_has_negative_radius() {
        let s = ThreadFormSpec::new(2.0, 0.65).with_ext_clearance(0.05);
        assert!(profile(&s, Side::Internal).is_ok());
        assert!(matches!(
            profile(&s, Side::External),
            Err(ThreadError::NegativeRadius {
                side: Side::External,
                ..
            })
        ));
    }

    #[test]
    fn invalid_spec_is_reported() {
        let s = ThreadFormSpec::default().with_flank_angle(180.0);
        assert_eq!(
            profile(&s, Side::Internal),
            Err(ThreadError::InvalidFlankAngle(180.0))
        );
    }

    #[test]
    fn strand_count_is_checked() {
        let set = ThreadStrandSet {
            side: Side::Internal,
            helix_radius: 1.0,
            thread_depth: 0.5,
            strands: vec![StrandOffset::new(1.0, 0.0, 0.0); 2],
        };
        assert_eq!(
            set.check(),
            Err(ThreadError::StrandCount {
                side: Side::Internal,
                count: 2
            })
        );
    }

    #[test]
    fn axis_radius_rounding_is_tolerated() {
        let set = |radius: Real| ThreadStrandSet {
            side: Side::External,
            helix_radius: 1.0,
            thread_depth: 0.5,
            strands: vec![
                StrandOffset::new(radius, 0.0, -0.5),
                StrandOffset::new(radius, 0.0, 0.5),
                StrandOffset::new(1.0, 0.5, 0.0),
            ],
        };
        assert!(set(0.0).check().is_ok());
        assert!(set(-tolerance() / 2.0).check().is_ok());
        assert!(matches!(
            set(-10.0 * tolerance()).check(),
            Err(ThreadError::NegativeRadius { index: 0, .. })
        ));
    }

    #[test]
    fn cross_section_follows_strand_order() {
        let set = profile(&spec(0.25, 0.5, 0.0, 0.0), Side::Internal).unwrap();
        let points = set.cross_section();
        assert_eq!(points.len(), 4);
        assert_abs_diff_eq!(points[0], Point2::new(8.0, -0.875), epsilon = 1e-12);
        assert_abs_diff_eq!(points[2], Point2::new(7.375, 0.25), epsilon = 1e-12);
    }
}
