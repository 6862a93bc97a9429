//! Follow-up actions for a selected icon
//!
//! The launcher hands the chosen item's `arg` back to one of these commands. Each
//! prints a single string (class name, glyph, or URL) for the launcher to paste or
//! open; nothing here touches the clipboard or a browser.

pub mod argv;
pub mod lookup;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::catalog::Catalog;
use argv::parse_argv;
use lookup::{css_class_name, to_character_reference, url};

/// Which string to derive from the selected icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ClassName,
    Character,
    Url,
}

/// Compute the action output for an `arg` payload
pub fn apply(action: Action, arg: &str) -> Result<String> {
    let argv = parse_argv(arg)?;
    tracing::debug!(icon = %argv.icon_id, unicode = %argv.icon_unicode, ?action, "applying action");

    let output = match action {
        Action::ClassName => css_class_name(&argv.icon_id),
        Action::Character => to_character_reference(&argv.icon_unicode),
        Action::Url => url(&argv.icon_id),
    };
    Ok(output)
}

/// Run an action and print its output without a trailing newline
pub fn run_action(action: Action, arg: &str) -> Result<()> {
    let output = apply(action, arg)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write action output")
}

/// Everything known about a single icon
#[derive(Debug, Serialize)]
pub struct IconInfo<'a> {
    pub id: &'a str,
    pub unicode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<&'a str>,
    pub class_name: String,
    pub url: String,
}

/// Look an icon up by id and describe it
pub fn icon_info<'a>(catalog: &'a Catalog, id: &str) -> Result<IconInfo<'a>> {
    let icon = catalog
        .get(id)
        .with_context(|| format!("No icon named '{}'", id))?;

    Ok(IconInfo {
        id: &icon.id,
        unicode: &icon.unicode,
        alias_of: icon.alias_of.as_deref(),
        aliases: icon.aliases.iter().map(String::as_str).collect(),
        class_name: css_class_name(&icon.id),
        url: url(icon.canonical_id()),
    })
}

/// Run the info command
pub fn run_info(catalog: &Catalog, id: &str, pretty: bool) -> Result<()> {
    let info = icon_info(catalog, id)?;
    let output = if pretty {
        serde_json::to_string_pretty(&info)?
    } else {
        serde_json::to_string(&info)?
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_class_name() {
        assert_eq!(apply(Action::ClassName, "adjust|||f042").unwrap(), "fa-adjust");
    }

    #[test]
    fn test_apply_url() {
        assert_eq!(
            apply(Action::Url, "adjust|||f042").unwrap(),
            "http://fontawesome.io/icon/adjust/"
        );
    }

    #[test]
    fn test_apply_character() {
        assert_eq!(apply(Action::Character, "music|||f001").unwrap(), "\u{f001}");
        assert_eq!(apply(Action::Character, "android|||f17b").unwrap(), "");
    }

    #[test]
    fn test_apply_malformed_arg() {
        let err = apply(Action::ClassName, "adjust").unwrap_err();
        assert!(err.to_string().contains("|||"));
    }

    #[test]
    fn test_icon_info_alias() {
        let catalog = Catalog::load().unwrap();
        let info = icon_info(&catalog, "star-half-empty").unwrap();
        assert_eq!(info.unicode, "f123");
        assert_eq!(info.alias_of, Some("star-half-o"));
        assert_eq!(info.class_name, "fa-star-half-empty");
        assert_eq!(info.url, "http://fontawesome.io/icon/star-half-o/");
    }

    #[test]
    fn test_icon_info_unknown() {
        let catalog = Catalog::load().unwrap();
        assert!(icon_info(&catalog, "awesome").is_err());
    }
}
