//! Keyword selection over the catalog

use crate::catalog::{Catalog, Icon};
use crate::search::query::Query;

/// Icons whose id contains every keyword, in catalog order.
///
/// An empty query keeps the whole catalog.
pub fn select<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Icon> {
    catalog.iter().filter(|icon| query.matches(&icon.id)).collect()
}
