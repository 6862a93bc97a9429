//! Renderer module
//!
//! Renders a ResultSet as launcher feedback: the XML script-filter document, or the
//! JSON form newer launcher versions accept.

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Write;

use crate::core::clock::Clock;
use crate::core::model::{ResultItem, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// JSON view of a result item
#[derive(Serialize)]
struct JsonItem<'a> {
    uid: String,
    title: &'a str,
    subtitle: &'a str,
    arg: &'a str,
    icon: JsonIcon<'a>,
    valid: bool,
}

#[derive(Serialize)]
struct JsonIcon<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct JsonFeedback<'a> {
    items: Vec<JsonItem<'a>>,
}

/// Renderer for result sets
pub struct Renderer<'a> {
    config: RenderConfig,
    clock: &'a dyn Clock,
}

impl<'a> Renderer<'a> {
    pub fn new(config: RenderConfig, clock: &'a dyn Clock) -> Self {
        Self { config, clock }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> Result<String> {
        let timestamp = self.clock.unix_timestamp();
        match self.config.format {
            OutputFormat::Xml => self.render_xml(result_set, timestamp),
            OutputFormat::Json => self.render_json(result_set, timestamp),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, result_set: &ResultSet, mut writer: W) -> Result<()> {
        let output = self.render(result_set)?;
        writeln!(writer, "{}", output).context("Failed to write feedback")
    }

    fn render_xml(&self, result_set: &ResultSet, timestamp: i64) -> Result<String> {
        let mut writer = if self.config.pretty {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        writer.write_event(Event::Start(BytesStart::new("items")))?;
        for item in &result_set.items {
            write_xml_item(&mut writer, item, timestamp)?;
        }
        writer.write_event(Event::End(BytesEnd::new("items")))?;

        String::from_utf8(writer.into_inner()).context("XML output is not valid UTF-8")
    }

    fn render_json(&self, result_set: &ResultSet, timestamp: i64) -> Result<String> {
        let feedback = JsonFeedback {
            items: result_set
                .items
                .iter()
                .map(|item| JsonItem {
                    uid: item.fresh_uid(timestamp),
                    title: &item.title,
                    subtitle: &item.subtitle,
                    arg: &item.arg,
                    icon: JsonIcon {
                        path: &item.icon.path,
                    },
                    valid: item.valid,
                })
                .collect(),
        };

        let output = if self.config.pretty {
            serde_json::to_string_pretty(&feedback)?
        } else {
            serde_json::to_string(&feedback)?
        };
        Ok(output)
    }
}

/// `<item arg=".." uid=".."><title/><subtitle/><icon/></item>`
fn write_xml_item<W: Write>(
    writer: &mut Writer<W>,
    item: &ResultItem,
    timestamp: i64,
) -> Result<()> {
    let uid = item.fresh_uid(timestamp);
    let mut start = BytesStart::new("item");
    start.push_attribute(("arg", item.arg.as_str()));
    start.push_attribute(("uid", uid.as_str()));
    if !item.valid {
        start.push_attribute(("valid", "no"));
    }
    writer.write_event(Event::Start(start))?;

    for (name, text) in [
        ("title", item.title.as_str()),
        ("subtitle", item.subtitle.as_str()),
        ("icon", item.icon.path.as_str()),
    ] {
        writer.write_event(Event::Start(BytesStart::new(name)))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}
