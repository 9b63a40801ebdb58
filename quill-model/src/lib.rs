//! Constants and small shared types used across Quill crates.
#![allow(missing_docs)]

pub mod entities;
pub mod error;
pub mod lang;
pub mod storage;

pub use entities::Entity;
pub use error::{LangCodeError, Result as ModelResult};
pub use lang::LangCode;

/// Version string reported by every API surface.
pub const API_VERSION: &str = "0.0.1";
