//! Launcher Result Model
//!
//! Every icon shown to the launcher is mapped to a `ResultItem` before rendering.

use serde::{Deserialize, Serialize};

use crate::actions::lookup::css_class_name;
use crate::catalog::Icon;

/// Separator between icon id and unicode in the `arg` payload
pub const ARG_SEPARATOR: &str = "|||";

/// Default directory holding the `fa-<id>.png` previews
pub const DEFAULT_ICON_DIR: &str = "./icons";

/// Icon type for a plain image path
pub const ICON_TYPE_DEFAULT: &str = "default";

/// Item image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIcon {
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
}

/// One selectable entry in the launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Icon id; the rendered uid prefixes it with the run timestamp
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    /// `<id>|||<unicode>`, handed to the follow-up actions
    pub arg: String,
    pub icon: ItemIcon,
    pub valid: bool,
}

impl ResultItem {
    /// Map an icon to its launcher entry
    pub fn from_icon(icon: &Icon, icon_dir: &str) -> Self {
        let class_name = css_class_name(&icon.id);
        Self {
            uid: icon.id.clone(),
            title: icon.id.clone(),
            subtitle: format!("Paste class name: {}", class_name),
            arg: format!("{}{}{}", icon.id, ARG_SEPARATOR, icon.unicode),
            icon: ItemIcon {
                kind: ICON_TYPE_DEFAULT.to_string(),
                path: format!("{}/{}.png", icon_dir.trim_end_matches('/'), class_name),
            },
            valid: true,
        }
    }

    /// Uid that changes every run so the launcher never reorders by history
    pub fn fresh_uid(&self, timestamp: i64) -> String {
        format!("{}-{}", timestamp, self.uid)
    }
}

/// Ordered collection of result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[allow(dead_code)]
    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
