//! # Bursary Core
//!
//! Domain types, the provider trait, and error definitions for the Bursary
//! chat pipelines. This crate has **zero framework dependencies** — it
//! defines the domain model that the other crates implement against.
//!
//! Two pipelines share these types: the tutor/counselor chatbot and the
//! scholarship finder. Both speak in ordered [`Turn`] sequences, call a
//! [`Provider`] once per user message, and surface failures through the
//! [`Error`] taxonomy.

pub mod error;
pub mod provider;
pub mod turn;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use provider::{
    NO_CONTENT_SENTINEL, Provider, ProviderRequest, ProviderResponse, Usage,
};
pub use turn::{Role, Turn};
