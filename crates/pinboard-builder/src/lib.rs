mod builder;
mod error;

pub use builder::{Builder, DefaultBuilder, StandardBuilder, build};
pub use error::BuildError;
