//! Grammar registry: language tag → compiled grammar and queries.

use crate::error::{QueryRole, RegistryError};
use crate::languages::{
    self, CAPTURE_DOC, CAPTURE_EXPORT_NAME, CAPTURE_EXPORT_TYPE, CAPTURE_IMPORT_PATH, CAPTURE_KIND,
    CAPTURE_NAME, CAPTURE_SIGNATURE, LanguageQuery,
};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// What a capture contributes to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaptureRole {
    Name,
    Signature,
    Doc,
    Kind,
    ImportPath,
    ExportName,
    ExportType,
}

impl CaptureRole {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            CAPTURE_NAME => Self::Name,
            CAPTURE_SIGNATURE => Self::Signature,
            CAPTURE_DOC => Self::Doc,
            CAPTURE_KIND => Self::Kind,
            CAPTURE_IMPORT_PATH => Self::ImportPath,
            CAPTURE_EXPORT_NAME => Self::ExportName,
            CAPTURE_EXPORT_TYPE => Self::ExportType,
            _ => return None,
        })
    }
}

/// A language with its queries compiled. Immutable once built.
pub struct CompiledLanguage {
    def: Arc<dyn LanguageQuery>,
    grammar: tree_sitter::Language,
    query: tree_sitter::Query,
    roles: Vec<Option<CaptureRole>>,
    import_query: Option<tree_sitter::Query>,
    import_roles: Vec<Option<CaptureRole>>,
}

impl CompiledLanguage {
    /// Compile a language's queries.
    pub fn compile(tag: &str, def: Arc<dyn LanguageQuery>) -> Result<Self, RegistryError> {
        let grammar = def.grammar();
        // Surface ABI mismatches here rather than on the first parse.
        tree_sitter::Parser::new()
            .set_language(&grammar)
            .map_err(|source| RegistryError::Grammar {
                language: tag.to_string(),
                source,
            })?;

        let query = tree_sitter::Query::new(&grammar, def.query()).map_err(|source| {
            RegistryError::Query {
                language: tag.to_string(),
                role: QueryRole::Signature,
                source,
            }
        })?;
        let allowed = def.captures();
        let roles = query
            .capture_names()
            .iter()
            .map(|n| {
                if allowed.contains(n) {
                    CaptureRole::from_name(n)
                } else {
                    None
                }
            })
            .collect();

        let import_query = def
            .import_query()
            .map(|src| tree_sitter::Query::new(&grammar, src))
            .transpose()
            .map_err(|source| RegistryError::Query {
                language: tag.to_string(),
                role: QueryRole::Import,
                source,
            })?;
        let import_roles = import_query
            .as_ref()
            .map(|q| {
                q.capture_names()
                    .iter()
                    .map(|n| CaptureRole::from_name(n))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            def,
            grammar,
            query,
            roles,
            import_query,
            import_roles,
        })
    }

    pub fn definition(&self) -> &dyn LanguageQuery {
        self.def.as_ref()
    }

    pub fn grammar(&self) -> &tree_sitter::Language {
        &self.grammar
    }

    pub fn query(&self) -> &tree_sitter::Query {
        &self.query
    }

    pub fn import_query(&self) -> Option<&tree_sitter::Query> {
        self.import_query.as_ref()
    }

    pub(crate) fn role(&self, capture_index: u32) -> Option<CaptureRole> {
        self.roles.get(capture_index as usize).copied().flatten()
    }

    pub(crate) fn import_role(&self, capture_index: u32) -> Option<CaptureRole> {
        self.import_roles.get(capture_index as usize).copied().flatten()
    }
}

/// Tag → compiled language map.
///
/// Registration takes the write lock; lookups share the read lock.
#[derive(Default)]
pub struct Registry {
    languages: RwLock<BTreeMap<String, Arc<CompiledLanguage>>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in language whose queries compile.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for (tag, def) in languages::builtins() {
            if let Err(e) = registry.register(tag, def) {
                tracing::warn!("skipping built-in language {tag}: {e}");
            }
        }
        registry
    }

    /// Compile and add a language. An existing tag is replaced.
    pub fn register(&self, tag: &str, def: Arc<dyn LanguageQuery>) -> Result<(), RegistryError> {
        let compiled = Arc::new(CompiledLanguage::compile(tag, def)?);
        self.languages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tag.to_string(), compiled);
        Ok(())
    }

    pub fn get(&self, tag: &str) -> Option<Arc<CompiledLanguage>> {
        self.languages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(tag)
            .cloned()
    }

    /// Registered tags, sorted.
    pub fn languages(&self) -> Vec<String> {
        self.languages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

/// The process-wide registry with the built-in languages, built on first use.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::with_builtins)
}
