pub mod constants;
pub mod curve;
pub mod driver;
pub mod error;
pub mod field;
pub mod geometry;
pub mod spiral;
pub mod state;

pub use constants::*;
pub use curve::*;
pub use driver::*;
pub use error::*;
pub use field::*;
pub use geometry::*;
pub use spiral::*;
pub use state::*;
