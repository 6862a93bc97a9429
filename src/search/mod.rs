//! Script filter: keywords in, launcher feedback out

pub mod query;
pub mod select;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::core::clock::Clock;
use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use query::Query;
use select::select;

/// Filter the catalog and map each surviving icon to a launcher item
pub fn filter_icons(catalog: &Catalog, query: &Query, icon_dir: &str) -> ResultSet {
    let result_set: ResultSet = select(catalog, query)
        .into_iter()
        .map(|icon| ResultItem::from_icon(icon, icon_dir))
        .collect();

    tracing::debug!(
        keywords = query.keywords().len(),
        matches = result_set.len(),
        "filtered catalog"
    );
    result_set
}

/// Run the filter command
pub fn run_filter(
    catalog: &Catalog,
    keywords: &[String],
    icon_dir: &str,
    clock: &dyn Clock,
    render_config: RenderConfig,
) -> Result<()> {
    let query = Query::from_args(keywords);
    let result_set = filter_icons(catalog, &query, icon_dir);

    if result_set.is_empty() {
        tracing::info!(keywords = ?query.keywords(), "no icon matched");
    }

    let renderer = Renderer::new(render_config, clock);
    renderer.render_to(&result_set, std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DEFAULT_ICON_DIR;

    #[test]
    fn test_filter_icons_maps_items() {
        let catalog = Catalog::load().unwrap();
        let result_set = filter_icons(&catalog, &Query::from_args(["apple"]), DEFAULT_ICON_DIR);

        assert_eq!(result_set.len(), 1);
        let item = &result_set.items[0];
        assert_eq!(item.arg, "apple|||f179");
        assert_eq!(item.subtitle, "Paste class name: fa-apple");
        assert_eq!(item.icon.path, "./icons/fa-apple.png");
    }

    #[test]
    fn test_filter_icons_no_match_is_empty() {
        let catalog = Catalog::load().unwrap();
        let result_set = filter_icons(&catalog, &Query::from_args(["icons"]), DEFAULT_ICON_DIR);
        assert!(result_set.is_empty());
    }
}
