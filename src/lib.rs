//! Helical thread geometry for **3D printable nuts and bolts**.
//!
//! Threads are described as a handful of tapering helical strands. Ruling
//! consecutive strands together (last back to first) gives the closed flank
//! of a triangular or trapezoidal thread, internal or external. This crate
//! computes the strands; meshing, booleans and export belong to whichever
//! geometry kernel consumes the curves.
//!
//! ```
//! use helical_threads::{Side, ThreadAssembly, ThreadFormSpec, traits::ParametricCurve};
//!
//! let spec = ThreadFormSpec::default();
//! let bolt = ThreadAssembly::new(&spec, Side::External).unwrap();
//! for (a, b) in bolt.ruled_pairs() {
//!     let _rail_a = bolt.curves()[a].sample(64);
//!     let _rail_b = bolt.curves()[b].sample(64);
//! }
//! assert!(bolt.thread_depth() > 0.0);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sample strands in parallel
//! - **serde**: `Serialize`/`Deserialize` for specs, so thread designs can be loaded from config

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod helix;
pub mod thread;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ThreadError;
pub use helix::{Domain, HelixStrandSpec, Taper};
pub use thread::{
    Convergence, Cutoff, HelicalThreads, Side, StrandOffset, ThreadAssembly, ThreadFormSpec,
    ThreadStrandSet, helical_threads, profile,
};
