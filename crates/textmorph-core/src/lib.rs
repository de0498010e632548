//! Textmorph Core - a catalog of text representation transforms
//!
//! This crate turns an input string into an alternate textual representation
//! chosen from a fixed catalog: numeral-base encodings, byte and character
//! escapes, script substitutions, random insertions, a nested composition of
//! escapes and an acrostic poem written by a chat model.
//!
//! # Main Components
//!
//! - **Transform Contract**: the [`Transform`] trait and the [`apply`] wrapper
//! - **Catalog**: [`TransformKind`] and [`build_transform`]
//! - **Classification**: character-set predicates used by validation
//! - **Tables**: static lookup tables and word pools
//! - **LLM**: the [`ChatClient`] seam and an OpenAI-compatible client
//! - **Error Handling**: [`Error`] and [`TransformError`] built on `thiserror`
//!
//! # Example
//!
//! ```
//! use textmorph_core::{apply, build_transform, TransformKind};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn example() -> textmorph_core::Result<()> {
//!     let strategy = build_transform(TransformKind::Base64, None)?;
//!     let output = apply(strategy.as_ref(), "hi", &mut StdRng::seed_from_u64(0))?;
//!     assert_eq!(output, "aGk=");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod classify;
pub mod error;
pub mod llm;
pub mod tables;
pub mod transform;

// Re-export main types for convenience
pub use error::{Error, Result, TransformError, INVALID_INPUT_MESSAGE};
pub use llm::{ChatClient, ChatMessage, LlmConfig, MessageRole, OpenAiChatClient};
pub use transform::acrostic::{AcrosticPoem, ERROR_SENTINEL};
pub use transform::{
    apply, apply_with_thread_rng, build_transform, Transform, TransformFamily, TransformKind,
    TransformResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
