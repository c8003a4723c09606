pub mod edit;
pub mod text;

// Re-export common types
pub use edit::TextEdit;
pub use text::{end_position, offset_at};
