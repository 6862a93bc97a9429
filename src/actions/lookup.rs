//! Name, URL and glyph lookups for a selected icon

use crate::catalog::data::UNRENDERABLE;
use crate::catalog::icon::is_known_unicode;

const CLASS_PREFIX: &str = "fa-";
const ICON_URL_BASE: &str = "http://fontawesome.io/icon";

/// CSS class name for an icon id
pub fn css_class_name(id: &str) -> String {
    format!("{}{}", CLASS_PREFIX, id)
}

/// Documentation page for an icon id
pub fn url(id: &str) -> String {
    format!("{}/{}/", ICON_URL_BASE, id)
}

/// Literal glyph for a code point, or an empty string when the launcher cannot show it.
///
/// Only code points of catalog icons qualify, minus the static non-renderable list.
pub fn to_character_reference(unicode: &str) -> String {
    let unicode = unicode.to_lowercase();
    if !is_known_unicode(&unicode) || UNRENDERABLE.contains(&unicode.as_str()) {
        return String::new();
    }

    u32::from_str_radix(&unicode, 16)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}
