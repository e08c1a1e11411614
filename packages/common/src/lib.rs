//! # Canvas Common
//!
//! Leaf utilities shared by the canvas editor crates: centimeter/pixel
//! conversion, dialog input validation and the dimension confirm flow.

pub mod dimension;
pub mod error;
pub mod units;
pub mod validator;

pub use dimension::*;
pub use error::*;
pub use units::*;
pub use validator::*;
