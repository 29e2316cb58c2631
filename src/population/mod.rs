//! Population management
//!
//! This module provides the Candidate and Population types and the
//! best-solution reduction.

pub mod individual;
#[allow(clippy::module_inception)]
pub mod population;
pub mod reduction;

pub mod prelude {
    pub use super::individual::*;
    pub use super::population::*;
    pub use super::reduction::*;
}
