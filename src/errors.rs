//! Thread configuration errors

use crate::float_types::Real;
use crate::thread::form::Side;

/// All the configuration problems a thread specification can have.
///
/// Curve evaluation never produces these: a degenerate strand evaluates to the
/// origin instead. These are reported when a [`ThreadFormSpec`](crate::thread::ThreadFormSpec)
/// cannot be turned into strands the geometry kernel could rule into surfaces.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThreadError {
    /// (InvalidPitch) The pitch must be strictly positive
    #[error("(InvalidPitch) pitch must be > 0, got {0}")]
    InvalidPitch(Real),
    /// (InvalidMajorRadius) The major radius must be strictly positive
    #[error("(InvalidMajorRadius) major radius must be > 0, got {0}")]
    InvalidMajorRadius(Real),
    /// (InvalidFlankAngle) The included flank angle must be inside (0, 180) degrees
    #[error("(InvalidFlankAngle) flank angle must be in (0, 180) degrees, got {0}")]
    InvalidFlankAngle(Real),
    /// (InvalidCutoff) A cutoff resolved to a negative width, a width >= pitch, or used a zero divisor
    #[error("(InvalidCutoff) {name} cutoff must be in [0, pitch={pitch}), got {width}")]
    InvalidCutoff {
        name: &'static str,
        width: Real,
        pitch: Real,
    },
    /// (CutoffsExceedPitch) The two flats leave no flank between them
    #[error("(CutoffsExceedPitch) major cutoff {major} + minor cutoff {minor} must be < pitch {pitch}")]
    CutoffsExceedPitch { major: Real, minor: Real, pitch: Real },
    /// (NegativeOverlap) Thread overlap must be >= 0
    #[error("(NegativeOverlap) thread overlap must be >= 0, got {0}")]
    NegativeOverlap(Real),
    /// (NegativeClearance) External clearance must be >= 0
    #[error("(NegativeClearance) external clearance must be >= 0, got {0}")]
    NegativeClearance(Real),
    /// (InvalidInset) Inset must be >= 0
    #[error("(InvalidInset) inset must be >= 0, got {0}")]
    InvalidInset(Real),
    /// (InvalidHeight) The threaded height must leave room for both insets
    #[error("(InvalidHeight) height {height} is smaller than 2 * inset ({inset})")]
    InvalidHeight { height: Real, inset: Real },
    /// (InvalidTaper) Taper positions must satisfy 0 <= fade_in_end <= fade_out_start <= 1
    #[error("(InvalidTaper) taper must satisfy 0 <= fade_in_end ({fade_in_end}) <= fade_out_start ({fade_out_start}) <= 1")]
    InvalidTaper { fade_in_end: Real, fade_out_start: Real },
    /// (InvalidDomain) The t-domain must be ordered
    #[error("(InvalidDomain) domain first_t ({first_t}) must be <= last_t ({last_t})")]
    InvalidDomain { first_t: Real, last_t: Real },
    /// (NonFinite) A parameter is NaN or infinite
    #[error("(NonFinite) {0} is NaN or infinite")]
    NonFinite(&'static str),
    /// (ClearanceTooLarge) The external clearance leaves no external root flank
    #[error("(ClearanceTooLarge) external clearance {clearance} leaves a root half height of {root_half_height}")]
    ClearanceTooLarge {
        clearance: Real,
        root_half_height: Real,
    },
    /// (NegativeRadius) A strand ends up inside the thread axis
    #[error("(NegativeRadius) {side} strand {index} has radius {radius}")]
    NegativeRadius {
        side: Side,
        index: usize,
        radius: Real,
    },
    /// (StrandCount) A flank must be built from 3 or 4 strands
    #[error("(StrandCount) {side} flank has {count} strands, expected 3 or 4")]
    StrandCount { side: Side, count: usize },
}
