//! View layer: draws the model, never changes it.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
