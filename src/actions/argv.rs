//! Parsing of the `arg` payload handed back by the launcher

use thiserror::Error;

use crate::core::model::ARG_SEPARATOR;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgvError {
    #[error("expected '<id>|||<unicode>', got '{0}'")]
    MissingSeparator(String),
}

/// The selected icon, as encoded in a result item's `arg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconArgv {
    pub icon_id: String,
    pub icon_unicode: String,
}

/// Split `"<id>|||<unicode>"` into its parts
pub fn parse_argv(arg: &str) -> Result<IconArgv, ArgvError> {
    let (id, unicode) = arg
        .trim()
        .split_once(ARG_SEPARATOR)
        .ok_or_else(|| ArgvError::MissingSeparator(arg.to_string()))?;

    Ok(IconArgv {
        icon_id: id.to_string(),
        icon_unicode: unicode.to_string(),
    })
}
