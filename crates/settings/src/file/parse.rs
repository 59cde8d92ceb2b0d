use std::path::Path;

use toml::{Table, Value};

use crate::{SettingDefinition, SettingsError};

/// Decodes `text` into `(definition, value)` pairs, sorted by section then key.
pub(super) fn parse_entries(
    path: &Path,
    text: &str,
) -> Result<Vec<(SettingDefinition, bool)>, SettingsError> {
    let table: Table = toml::from_str(text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for (section, body) in table {
        let Value::Table(body) = body else {
            return Err(SettingsError::NotASection { name: section });
        };
        for (key, value) in body {
            let Value::Boolean(value) = value else {
                return Err(SettingsError::NotBoolean { section, key });
            };
            entries.push((SettingDefinition::new(section.clone(), key), value));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<(SettingDefinition, bool)>, SettingsError> {
        parse_entries(Path::new("test.toml"), text)
    }

    #[test]
    fn quoted_headers_keep_dots_in_section_names() {
        let entries = parse("[\"Mods.net\"]\n\"Debug Sockets\" = true\n").unwrap();
        assert_eq!(
            entries,
            vec![(SettingDefinition::new("Mods.net", "Debug Sockets"), true)]
        );
    }

    #[test]
    fn comments_are_ignored() {
        let text = "[\"switchlog\"]\n## describes\n# Default value: false\n\"Developer Mode\" = false\n";
        let entries = parse(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].1);
    }

    #[test]
    fn non_boolean_values_are_rejected() {
        let err = parse("[\"Mods.net\"]\n\"Debug Sockets\" = 1\n").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::NotBoolean { ref section, ref key }
                if section == "Mods.net" && key == "Debug Sockets"
        ));
    }

    #[test]
    fn top_level_scalars_are_rejected() {
        let err = parse("stray = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::NotASection { ref name } if name == "stray"));
    }

    #[test]
    fn syntax_errors_carry_the_path() {
        let err = parse("[unterminated").unwrap_err();
        match err {
            SettingsError::Parse { path, .. } => assert_eq!(path, Path::new("test.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_document_has_no_entries() {
        assert!(parse("").unwrap().is_empty());
    }
}
