//! Thread profiles and their assembly into strand curves.

pub mod assembly;
pub mod form;
pub mod profile;

pub use assembly::{Convergence, ThreadAssembly};
pub use form::{Cutoff, Side, ThreadFormSpec};
pub use profile::{
    HelicalThreads, ProfileDimensions, StrandOffset, ThreadStrandSet, helical_threads, profile,
};
