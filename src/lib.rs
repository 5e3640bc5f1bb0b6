pub mod camera;
pub mod curve;
pub mod error;
pub mod heap;
pub mod math;

pub use error::{InklineError, Result};
