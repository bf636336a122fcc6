pub mod session;
pub mod render;
pub mod style;

pub use self::session::*;
