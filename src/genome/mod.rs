//! Search-space primitives
//!
//! This module provides the `Point` type and the box `Bounds` it lives in.

pub mod bounds;
pub mod point;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::point::*;
}
