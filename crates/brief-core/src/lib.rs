//! Shared types for brief: extracted signatures, language tags and configuration.

pub mod config;
pub mod language;
pub mod signature;

pub use language::{language_for_extension, language_for_path};
pub use signature::{
    GoVisibility, ImportExport, ImportKind, ParseOptions, Signature, SignatureKind,
};
