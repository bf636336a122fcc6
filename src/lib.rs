//!
//! # Hex Affine
//!
//! An interactive editor for applying affine transformations to a fixed
//! six-vertex figure. The geometry lives in `hex_transform`, the drawing
//! instructions in `hex_canvas`, and the HTTP round-trip variant in
//! `hex_http`; this crate ties them together into an editing session and
//! renders one frame of the result after every change.
//!
#![warn(bare_trait_objects)]

pub mod affine;
pub use self::affine::*;
