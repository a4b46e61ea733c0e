// src/extractors/mod.rs
pub mod category;
pub mod links;

// Re-export key extraction types for convenience
pub use category::{render_selection, Selection};
