//! Icon records and id/unicode resolution

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

use super::data::{ALIASES, ICONS};

/// Canonical id -> unicode
static UNICODE_BY_ID: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ICONS.iter().copied().collect());

/// Alias id -> canonical id
static CANONICAL_BY_ALIAS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

/// Canonical id -> alias ids, in table order
static ALIASES_BY_ID: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
    for &(alias, canonical) in ALIASES {
        map.entry(canonical).or_default().push(alias);
    }
    map
});

/// Errors raised while building icons from the static tables
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown icon id: {0}")]
    UnknownIcon(String),

    #[error("alias '{alias}' points at '{canonical}', which has no code point")]
    DanglingAlias { alias: String, canonical: String },
}

/// A single Font Awesome glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Identifier as requested (canonical or alias)
    pub id: String,

    /// Four hex digits, lowercase
    pub unicode: String,

    /// Canonical id when `id` is an alias
    pub alias_of: Option<String>,

    /// Alias ids resolving to this icon (canonical icons only)
    pub aliases: Vec<String>,
}

impl Icon {
    /// Build an icon, resolving its code point directly or through the alias table.
    pub fn new(id: &str) -> Result<Self, CatalogError> {
        if let Some(unicode) = UNICODE_BY_ID.get(id) {
            let aliases = ALIASES_BY_ID
                .get(id)
                .map(|names| names.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default();
            return Ok(Self {
                id: id.to_string(),
                unicode: unicode.to_string(),
                alias_of: None,
                aliases,
            });
        }

        let canonical = CANONICAL_BY_ALIAS
            .get(id)
            .ok_or_else(|| CatalogError::UnknownIcon(id.to_string()))?;
        let unicode = UNICODE_BY_ID
            .get(canonical)
            .ok_or_else(|| CatalogError::DanglingAlias {
                alias: id.to_string(),
                canonical: canonical.to_string(),
            })?;

        Ok(Self {
            id: id.to_string(),
            unicode: unicode.to_string(),
            alias_of: Some(canonical.to_string()),
            aliases: Vec::new(),
        })
    }

    #[allow(dead_code)]
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }

    /// The canonical id this icon resolves to
    pub fn canonical_id(&self) -> &str {
        self.alias_of.as_deref().unwrap_or(&self.id)
    }
}

/// Whether `unicode` is the code point of some catalog icon
pub fn is_known_unicode(unicode: &str) -> bool {
    UNICODE_BY_ID.values().any(|u| *u == unicode)
}
