pub mod generator;
pub mod template;

pub use generator::{generate, Fragment, FragmentKind, GeneratedCode};
