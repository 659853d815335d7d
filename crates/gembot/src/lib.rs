//! Gembot Domain Library
//!
//! Core domain types and interfaces for the Gembot prompt service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (PromptRecord, ResponseRecord)
//!   - `store`: In-memory prompt/response store with dense positional ids
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `generator`: External text-generation service interface

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, PromptRecord, PromptStore, PromptUpdate, ResponseRecord};
pub use ports::TextGenerator;
