//! One tapering helical strand.

use crate::errors::ThreadError;
use crate::float_types::{Real, TAU};
use crate::helix::fade::Taper;
use crate::traits::ParametricCurve;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed `t` interval a strand is evaluated on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Domain {
    pub first_t: Real,
    pub last_t: Real,
}

impl Domain {
    pub const fn new(first_t: Real, last_t: Real) -> Self {
        Self { first_t, last_t }
    }

    #[inline]
    pub const fn contains(&self, t: Real) -> bool {
        t >= self.first_t && t <= self.last_t
    }

    #[inline]
    pub const fn span(&self) -> Real {
        self.last_t - self.first_t
    }

    /// Absolute `t` at relative position `rpos` in the domain.
    #[inline]
    pub const fn at(&self, rpos: Real) -> Real {
        rpos * self.span() + self.first_t
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Everything needed to evaluate one strand of a thread flank.
///
/// `nominal_radius` is the strand's own helix radius; `horizontal_offset` and
/// `vertical_offset` are eased in and out by the [`Taper`], which is what
/// shapes the flank's cross-section as `t` advances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HelixStrandSpec {
    pub nominal_radius: Real,
    pub horizontal_offset: Real,
    pub vertical_offset: Real,
    pub pitch: Real,
    pub height: Real,
    pub inset: Real,
    pub taper: Taper,
    pub domain: Domain,
}

impl HelixStrandSpec {
    /// A plain helix with no offsets, default taper and the unit domain.
    pub fn new(nominal_radius: Real, pitch: Real, height: Real) -> Self {
        Self {
            nominal_radius,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            pitch,
            height,
            inset: 0.0,
            taper: Taper::default(),
            domain: Domain::default(),
        }
    }

    pub const fn with_offsets(mut self, horizontal_offset: Real, vertical_offset: Real) -> Self {
        self.horizontal_offset = horizontal_offset;
        self.vertical_offset = vertical_offset;
        self
    }

    pub const fn with_inset(mut self, inset: Real) -> Self {
        self.inset = inset;
        self
    }

    pub const fn with_taper(mut self, taper: Taper) -> Self {
        self.taper = taper;
        self
    }

    pub const fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Height left for the helix once the top and bottom insets are removed.
    #[inline]
    pub const fn effective_height(&self) -> Real {
        self.height - 2.0 * self.inset
    }

    /// A degenerate strand evaluates to the origin everywhere.
    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.pitch == 0.0 || self.effective_height() == 0.0
    }

    /// Turn angle at `t`. Shared by every strand with the same pitch and height,
    /// which keeps mating internal and external threads the same handedness.
    #[inline]
    pub fn angle_at(&self, t: Real) -> Real {
        TAU * (self.effective_height() / self.pitch) * t
    }

    /// **Tapering helix evaluation**
    ///
    /// ```text
    /// scale  = fade(t)
    /// radius = nominal_radius + horizontal_offset·scale
    /// angle  = 2π·(effective_height/pitch)·t
    /// x = radius·sin(-angle)
    /// y = radius·cos(angle)
    /// z = effective_height·t + vertical_offset·scale + inset
    /// ```
    ///
    /// Illegal parameters (`pitch == 0`, zero effective height, or `t` outside
    /// the domain) return the origin rather than an error, so the kernel can
    /// sample blindly.
    pub fn evaluate(&self, t: Real) -> Point3<Real> {
        if self.is_degenerate() || !self.domain.contains(t) {
            return Point3::origin();
        }

        let scale = self.taper.fade(t);
        let radius = self.nominal_radius + self.horizontal_offset * scale;
        let angle = self.angle_at(t);
        let height = self.effective_height();

        Point3::new(
            radius * (-angle).sin(),
            radius * angle.cos(),
            height * t + self.vertical_offset * scale + self.inset,
        )
    }

    /// Check the taper and domain orderings.
    ///
    /// Evaluation never calls this; it is for callers that build strands by
    /// hand and want the mistakes reported.
    pub fn validate(&self) -> Result<(), ThreadError> {
        self.taper.validate()?;

        let Domain { first_t, last_t } = self.domain;
        let fade_in_t = self.domain.at(self.taper.fade_in_end);
        let fade_out_t = self.domain.at(self.taper.fade_out_start);
        if !(first_t <= fade_in_t && fade_in_t <= fade_out_t && fade_out_t <= last_t) {
            return Err(ThreadError::InvalidDomain { first_t, last_t });
        }
        Ok(())
    }
}

impl ParametricCurve for HelixStrandSpec {
    fn point_at(&self, t: Real) -> Point3<Real> {
        self.evaluate(t)
    }

    fn domain(&self) -> (Real, Real) {
        (self.domain.first_t, self.domain.last_t)
    }
}
