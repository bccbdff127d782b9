//! Macroscopic thread parameters.

use crate::errors::ThreadError;
use crate::float_types::Real;
use crate::helix::{Domain, Taper};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which half of a mating pair a flank belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Threads cut into a nut; the helix sits on the major radius.
    Internal,
    /// Threads on a bolt; the helix sits on the clearance-adjusted minor radius.
    External,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Internal => write!(f, "internal"),
            Side::External => write!(f, "external"),
        }
    }
}

/// Width of a flat at the major or minor diameter.
///
/// Absent, a fixed width, or a fraction of the pitch. A zero width and an
/// absent cutoff produce the same profile, but a zero *divisor* is an error
/// rather than a silent "no cutoff".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cutoff {
    #[default]
    None,
    /// Absolute width along the pitch.
    Width(Real),
    /// `pitch / divisor`, e.g. `PitchDivisor(8.0)` for the ISO major flat.
    PitchDivisor(Real),
}

impl Cutoff {
    /// Resolve to a width for the given pitch.
    pub fn width(&self, pitch: Real) -> Result<Real, ThreadError> {
        match *self {
            Cutoff::None => Ok(0.0),
            Cutoff::Width(width) => Ok(width),
            Cutoff::PitchDivisor(divisor) if divisor != 0.0 => Ok(pitch / divisor),
            Cutoff::PitchDivisor(divisor) => Err(ThreadError::InvalidCutoff {
                name: "pitch divisor",
                width: divisor,
                pitch,
            }),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cutoff::None)
    }
}

/// The parameters of one thread design.
///
/// Built once and treated as immutable; every derived strand set is a pure
/// function of it. Defaults give an 8 mm, 2 mm pitch, 90° printable thread
/// with ISO-like flats.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThreadFormSpec {
    /// Axial distance between successive turns.
    pub pitch: Real,
    /// Radius of the internal thread's helix (half the major diameter).
    pub major_radius: Real,
    /// Included angle of the thread's triangular profile.
    pub flank_angle_degrees: Real,
    /// Flat at the major diameter.
    pub major_cutoff: Cutoff,
    /// Flat at the minor diameter.
    pub minor_cutoff: Cutoff,
    /// How far the threads reach into their core so the union is manifold.
    pub thread_overlap: Real,
    /// Gap between mating internal and external flanks.
    pub ext_clearance: Real,
    /// Threads start `inset` above the bottom and stop `inset` below the top.
    pub inset: Real,
    /// Total threaded height including both insets.
    pub height: Real,
    pub taper: Taper,
    pub domain: Domain,
}

impl Default for ThreadFormSpec {
    fn default() -> Self {
        let pitch = 2.0;
        let inset = pitch / 3.0;
        Self {
            pitch,
            major_radius: 4.0,
            flank_angle_degrees: 90.0,
            major_cutoff: Cutoff::PitchDivisor(8.0),
            minor_cutoff: Cutoff::PitchDivisor(4.0),
            thread_overlap: 0.001,
            ext_clearance: 0.05,
            inset,
            height: 10.0 + 2.0 * inset,
            taper: Taper::default(),
            domain: Domain::default(),
        }
    }
}

impl ThreadFormSpec {
    /// A spec with the given pitch and major radius, everything else default.
    ///
    /// Only the [`Cutoff::PitchDivisor`] cutoffs follow the new pitch; `inset`
    /// and `height` keep their 2 mm pitch defaults until set with
    /// [`with_inset`](Self::with_inset) and [`with_height`](Self::with_height).
    pub fn new(pitch: Real, major_radius: Real) -> Self {
        Self {
            pitch,
            major_radius,
            ..Self::default()
        }
    }

    pub const fn with_pitch(mut self, pitch: Real) -> Self {
        self.pitch = pitch;
        self
    }

    pub const fn with_major_radius(mut self, major_radius: Real) -> Self {
        self.major_radius = major_radius;
        self
    }

    pub const fn with_flank_angle(mut self, degrees: Real) -> Self {
        self.flank_angle_degrees = degrees;
        self
    }

    pub const fn with_cutoffs(mut self, major: Cutoff, minor: Cutoff) -> Self {
        self.major_cutoff = major;
        self.minor_cutoff = minor;
        self
    }

    pub const fn with_thread_overlap(mut self, thread_overlap: Real) -> Self {
        self.thread_overlap = thread_overlap;
        self
    }

    pub const fn with_ext_clearance(mut self, ext_clearance: Real) -> Self {
        self.ext_clearance = ext_clearance;
        self
    }

    pub const fn with_inset(mut self, inset: Real) -> Self {
        self.inset = inset;
        self
    }

    pub const fn with_height(mut self, height: Real) -> Self {
        self.height = height;
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

    /// Resolved major cutoff width.
    pub fn major_cutoff_width(&self) -> Result<Real, ThreadError> {
        self.major_cutoff.width(self.pitch)
    }

    /// Resolved minor cutoff width.
    pub fn minor_cutoff_width(&self) -> Result<Real, ThreadError> {
        self.minor_cutoff.width(self.pitch)
    }

    /// Half the flank angle, in radians.
    #[inline]
    pub fn half_angle(&self) -> Real {
        self.flank_angle_degrees.to_radians() / 2.0
    }

    /// Check every invariant the profile derivation relies on.
    pub fn validate(&self) -> Result<(), ThreadError> {
        let finite = [
            ("pitch", self.pitch),
            ("major_radius", self.major_radius),
            ("flank_angle_degrees", self.flank_angle_degrees),
            ("thread_overlap", self.thread_overlap),
            ("ext_clearance", self.ext_clearance),
            ("inset", self.inset),
            ("height", self.height),
            ("fade_in_end", self.taper.fade_in_end),
            ("fade_out_start", self.taper.fade_out_start),
            ("first_t", self.domain.first_t),
            ("last_t", self.domain.last_t),
        ];
        if let Some(&(name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ThreadError::NonFinite(name));
        }

        if self.pitch <= 0.0 {
            return Err(ThreadError::InvalidPitch(self.pitch));
        }
        if self.major_radius <= 0.0 {
            return Err(ThreadError::InvalidMajorRadius(self.major_radius));
        }
        if self.flank_angle_degrees <= 0.0 || self.flank_angle_degrees >= 180.0 {
            return Err(ThreadError::InvalidFlankAngle(self.flank_angle_degrees));
        }

        let major = self.major_cutoff_width()?;
        let minor = self.minor_cutoff_width()?;
        for (name, width) in [("major", major), ("minor", minor)] {
            if !width.is_finite() || width < 0.0 || width >= self.pitch {
                return Err(ThreadError::InvalidCutoff {
                    name,
                    width,
                    pitch: self.pitch,
                });
            }
        }
        if major + minor >= self.pitch {
            return Err(ThreadError::CutoffsExceedPitch {
                major,
                minor,
                pitch: self.pitch,
            });
        }

        if self.thread_overlap < 0.0 {
            return Err(ThreadError::NegativeOverlap(self.thread_overlap));
        }
        if self.ext_clearance < 0.0 {
            return Err(ThreadError::NegativeClearance(self.ext_clearance));
        }
        if self.inset < 0.0 {
            return Err(ThreadError::InvalidInset(self.inset));
        }
        if self.height - 2.0 * self.inset < 0.0 {
            return Err(ThreadError::InvalidHeight {
                height: self.height,
                inset: self.inset,
            });
        }

        self.taper.validate()?;
        if self.domain.first_t > self.domain.last_t {
            return Err(ThreadError::InvalidDomain {
                first_t: self.domain.first_t,
                last_t: self.domain.last_t,
            });
        }
        Ok(())
    }
}
