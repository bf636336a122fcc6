//!
//! HTTP interface for the transformation service
//!
//! The endpoints here are stateless: every request carries the vertices it
//! wants transformed and every response carries the transformed vertices, so
//! the server never holds a shape between requests.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

extern crate hex_transform;
extern crate actix_web;

mod transform_handler;
mod static_file_handler;

pub use self::transform_handler::*;
pub use self::static_file_handler::*;
