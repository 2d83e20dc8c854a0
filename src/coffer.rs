//! Main module for coffer library functionality

pub mod container;
pub mod render;

pub use container::Coffer;
