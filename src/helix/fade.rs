//! Lead-in / lead-out easing for helical strands.
//!
//! A strand's radial and vertical offsets are multiplied by a blend scale so
//! the strand grows out of the base helix at its start and sinks back into it
//! at its end. The ends of a thread then meet the core or head it is unioned
//! with without a sharp step.

use crate::errors::ThreadError;
use crate::float_types::{FRAC_PI_2, Real, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// **Mathematical Foundation: Quarter-Sine Easing**
///
/// Maps progress `t` to a blend scale:
///
/// ```text
/// lead-in   (fade_in_end > 0, t <= fade_in_end):        sin((π/2)·t/fade_in_end)
/// body      (fade_in_end == 0 or fade_in_end < t < 1 - fade_out_start):  1
/// lead-out  (otherwise):                                sin(-(2π - (π/2)·(1-t)/fade_out_start))
/// ```
///
/// Inside `[0, 1]` the result rises `0 → 1` over the lead-in and falls
/// `1 → 0` over the lead-out. Outside that range the sine keeps oscillating,
/// so the scale lies in `[-1, 1]`.
///
/// `fade_out_start` is the width of the lead-out window measured back from
/// `t = 1`, not a position; [`Taper::validate`] still requires
/// `0 <= fade_in_end <= fade_out_start <= 1`.
///
/// A lead-out with `fade_out_start == 0` can only be reached with taper values
/// that break `0 <= fade_in_end <= fade_out_start`; it evaluates as body.
#[inline]
pub fn fade(t: Real, fade_in_end: Real, fade_out_start: Real) -> Real {
    if fade_in_end > 0.0 && t <= fade_in_end {
        (FRAC_PI_2 * t / fade_in_end).sin()
    } else if fade_in_end == 0.0
        || fade_out_start == 0.0
        || (t > fade_in_end && t < 1.0 - fade_out_start)
    {
        1.0
    } else {
        (-(TAU - FRAC_PI_2 * (1.0 - t) / fade_out_start)).sin()
    }
}

/// Where a strand's taper starts and stops, as fractions of its progress.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Taper {
    /// Progress at which the lead-in reaches full offset.
    pub fade_in_end: Real,
    /// Width of the lead-out window at the end of the strand.
    pub fade_out_start: Real,
}

impl Taper {
    pub const fn new(fade_in_end: Real, fade_out_start: Real) -> Self {
        Self {
            fade_in_end,
            fade_out_start,
        }
    }

    /// The same fraction on both ends.
    pub const fn symmetric(fraction: Real) -> Self {
        Self::new(fraction, fraction)
    }

    /// No easing: offsets are applied at full strength everywhere.
    pub const fn none() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Blend scale at `t`, see [`fade`].
    #[inline]
    pub fn fade(&self, t: Real) -> Real {
        fade(t, self.fade_in_end, self.fade_out_start)
    }

    /// Check `0 <= fade_in_end <= fade_out_start <= 1`.
    pub fn validate(&self) -> Result<(), ThreadError> {
        let ordered = 0.0 <= self.fade_in_end
            && self.fade_in_end <= self.fade_out_start
            && self.fade_out_start <= 1.0;
        if ordered {
            Ok(())
        } else {
            Err(ThreadError::InvalidTaper {
                fade_in_end: self.fade_in_end,
                fade_out_start: self.fade_out_start,
            })
        }
    }
}

impl Default for Taper {
    fn default() -> Self {
        Self::symmetric(0.1)
    }
}
