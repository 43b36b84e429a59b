//! Shared primitives for the dataset derivation engines.
//!
//! Everything here is pure, allocation-light, and dependency-free. The
//! engine crates (`calendar`, `wheel`, `series`, `density`) build on these.

pub mod angle;
pub mod interp;
pub mod order;
pub mod range;

pub use angle::*;
pub use interp::*;
pub use order::*;
pub use range::*;
