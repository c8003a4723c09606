pub mod config;
pub mod core;
pub mod document;
pub mod editor;
pub mod generation;
pub mod language;
pub mod parser;
