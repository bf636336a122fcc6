//!
//! Pure affine transformations over ordered 2D vertex sequences
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod coordinate;
mod shape;
mod transform;

pub use self::coordinate::*;
pub use self::shape::*;
pub use self::transform::*;
