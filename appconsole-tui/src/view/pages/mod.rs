pub mod canvas;
pub mod cutoff;
pub mod login;
pub mod panels;
pub mod public;
pub mod settings;
