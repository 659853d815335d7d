//! Ports Layer
//!
//! Abstract interfaces to external services.

pub mod generator;

pub use generator::TextGenerator;
