//! Search operators
//!
//! This module provides the mutation laws and the boundary policies that
//! keep mutated points inside the search box.

pub mod boundary;
pub mod mutation;

pub mod prelude {
    pub use super::boundary::*;
    pub use super::mutation::*;
}
