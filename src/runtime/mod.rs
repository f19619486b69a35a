pub mod error;
pub mod facts;

pub use error::*;
pub use facts::*;
