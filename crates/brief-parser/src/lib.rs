//! Tree-sitter based signature extraction.
//!
//! Supports Go, TypeScript/JavaScript, Python, C, C++ and Java. For each file
//! the engine runs a per-language query, classifies the matched declarations,
//! filters private ones, and cuts bodies off at the right delimiter.
//!
//! ```no_run
//! use brief_core::ParseOptions;
//!
//! let result = brief_parser::parse("func Add(a, b int) int { return a + b }", "go", &ParseOptions::default())?;
//! assert_eq!(result.signatures[0].text, "func Add(a, b int) int");
//! # Ok::<(), brief_parser::ParseError>(())
//! ```

pub mod engine;
pub mod error;
pub mod imports;
pub mod languages;
pub mod registry;
pub mod strip;
pub mod treesitter;
pub mod visibility;

pub use engine::{ParseResult, languages, parse};
pub use error::{ParseError, QueryRole, RegistryError};
pub use languages::LanguageQuery;
pub use registry::{CompiledLanguage, Registry, default_registry};
