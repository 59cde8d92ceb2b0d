use std::fmt::Write as _;

use toml_writer::{ToTomlKey as _, TomlKeyBuilder};

use crate::SettingDefinition;

pub(super) struct RenderEntry<'a> {
    pub(super) definition: &'a SettingDefinition,
    pub(super) value: bool,
    pub(super) default: Option<bool>,
    pub(super) description: Option<&'a str>,
}

const HEADER: &str = "## Settings file maintained by switchlog\n";

/// Renders entries grouped by section, sections in order of first appearance.
pub(super) fn render<'a>(entries: impl Iterator<Item = RenderEntry<'a>>) -> String {
    let mut sections: Vec<(&'a str, Vec<RenderEntry<'a>>)> = Vec::new();
    for entry in entries {
        let section: &'a str = entry.definition.section();
        match sections.iter_mut().find(|(name, _)| *name == section) {
            Some((_, group)) => group.push(entry),
            None => sections.push((section, vec![entry])),
        }
    }

    let mut out = String::from(HEADER);
    for (section, group) in sections {
        let _ = writeln!(out, "\n[{}]", quote_key(section));
        for entry in group {
            out.push('\n');
            if let Some(description) = entry.description {
                for line in description.lines() {
                    let _ = writeln!(out, "## {}", comment_text(line));
                }
            }
            if let Some(default) = entry.default {
                let _ = writeln!(out, "# Default value: {default}");
            }
            let _ = writeln!(out, "{} = {}", quote_key(entry.definition.key()), entry.value);
        }
    }
    out
}

/// Renders `raw` as a quoted TOML key.
fn quote_key(raw: &str) -> String {
    TomlKeyBuilder::new(raw).as_basic().to_toml_key()
}

/// Escapes everything a TOML comment may not contain. Tab is the only
/// control character comments allow.
fn comment_text(line: &str) -> String {
    let mut text = String::with_capacity(line.len());
    for ch in line.chars() {
        if ch.is_control() && ch != '\t' {
            text.extend(ch.escape_default());
        } else {
            text.push(ch);
        }
    }
    text
}
