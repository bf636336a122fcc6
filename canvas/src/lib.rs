//!
//! An abstract description of the drawing actions for a 2D canvas
//!
#![warn(bare_trait_objects)]

extern crate futures;
extern crate hex_transform as transform;
extern crate desync;

mod gc;
mod draw;
mod color;
mod canvas;

pub use self::gc::*;
pub use self::draw::*;
pub use self::color::*;
pub use self::canvas::*;
