//! Icon catalog
//!
//! The catalog is built once from the compiled-in Font Awesome tables and never
//! changes afterwards. Entries are ordered by identifier, which is the listing order
//! Font Awesome itself uses; aliases appear as entries of their own.

pub mod data;
pub mod icon;

pub use icon::{CatalogError, Icon};

/// Ordered, immutable list of icons
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    icons: Vec<Icon>,
}

impl Catalog {
    /// Build the full catalog from the static tables.
    ///
    /// Fails only if the tables are inconsistent with each other.
    pub fn load() -> Result<Self, CatalogError> {
        let mut ids: Vec<&str> = data::ICONS
            .iter()
            .chain(data::ALIASES.iter())
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();

        let icons = ids
            .into_iter()
            .map(Icon::new)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = icons.len(), "catalog loaded");
        Ok(Self { icons })
    }

    /// Look up an icon by canonical or alias id
    pub fn get(&self, id: &str) -> Option<&Icon> {
        self.icons
            .binary_search_by(|icon| icon.id.as_str().cmp(id))
            .ok()
            .map(|idx| &self.icons[idx])
    }

    #[allow(dead_code)]
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Icon> {
        self.icons.iter()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Icon;
    type IntoIter = std::slice::Iter<'a, Icon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}
