pub mod error;
pub mod types;

pub use error::{GogError, Result};
pub use types::{Position, Range, Selection};
