//! Search algorithms
//!
//! This module provides the small-world phenomenon search.

pub mod small_world;

pub mod prelude {
    pub use super::small_world::*;
}
