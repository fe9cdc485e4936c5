pub mod error;
pub mod math;
pub mod tolerance;

pub use error::{PhylloError, Result};
pub use math::{Point3, Vector3};
pub use tolerance::Tolerance;
