//! Tapering parametric helix strands.

pub mod fade;
pub mod strand;

pub use fade::{Taper, fade};
pub use strand::{Domain, HelixStrandSpec};
