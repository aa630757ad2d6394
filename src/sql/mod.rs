//! Safe SQL builder: identifiers from table specs only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
