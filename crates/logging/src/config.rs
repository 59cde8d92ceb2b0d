//! crates/logging/src/config.rs
//! Facility configuration and the naming scheme of persisted switches.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::identity::ComponentId;
use crate::pacing::{DEFAULT_PACE, PacingMode};
use crate::registry::SwitchKey;

/// Section holding the facility's own entries.
pub const DEFAULT_SECTION: &str = "switchlog";

/// Label of the global kill-switch.
pub const FORCE_OFF_LABEL: &str = "Force Debug Logging Off";

/// Description persisted with the global kill-switch.
pub const FORCE_OFF_DESCRIPTION: &str =
    "When enabled, no debug messages from components using switchlog will be logged.";

/// Label of the developer mode flag.
pub const DEVELOPER_MODE_LABEL: &str = "Developer Mode";

/// Description persisted with the developer mode flag.
pub const DEVELOPER_MODE_DESCRIPTION: &str = "When enabled, new config entries will default to true";

const COMPONENT_SECTION_PREFIX: &str = "Mods.";
const CATEGORY_LABEL_PREFIX: &str = "Debug ";

/// Runtime configuration of a [`DebugTools`](crate::DebugTools) instance.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugToolsConfig {
    /// Section holding the force-off and developer mode entries.
    pub section: String,
    /// Whether paced calls share one cooldown or keep one per category.
    pub pacing: PacingMode,
    /// Cooldown used by paced calls that do not pass their own.
    pub default_pace: Duration,
}

impl Default for DebugToolsConfig {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_owned(),
            pacing: PacingMode::default(),
            default_pace: DEFAULT_PACE,
        }
    }
}

impl DebugToolsConfig {
    /// Returns a copy using `pacing`.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingMode) -> Self {
        self.pacing = pacing;
        self
    }

    /// Returns a copy using `pace` as the default cooldown.
    #[must_use]
    pub fn with_default_pace(mut self, pace: Duration) -> Self {
        self.default_pace = pace;
        self
    }

    /// Returns a copy storing the facility entries in `section`.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }
}

/// Section holding every switch of `component`.
pub fn component_section(component: &ComponentId) -> String {
    format!("{COMPONENT_SECTION_PREFIX}{component}")
}

/// Label of the switch for `category`.
pub fn category_label(category: &str) -> String {
    format!("{CATEGORY_LABEL_PREFIX}{category}")
}

/// Description persisted with a category switch.
pub fn category_description(component: &ComponentId, category: &str) -> String {
    format!("Whether debug messages should be logged for {component} - {category}")
}

/// Recovers the component from a section written by [`component_section`].
pub fn parse_component_section(section: &str) -> Option<&str> {
    section
        .strip_prefix(COMPONENT_SECTION_PREFIX)
        .filter(|component| !component.is_empty())
}

/// Recovers the category from a label written by [`category_label`].
pub fn parse_category_label(label: &str) -> Option<&str> {
    label
        .strip_prefix(CATEGORY_LABEL_PREFIX)
        .filter(|category| !category.is_empty())
}

/// Error produced when a [`SwitchToken`] cannot be parsed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SwitchTokenError {
    /// The token was empty.
    #[error("empty switch token")]
    Empty,
    /// The key lacked a `component.category` separator or one of its halves.
    #[error("switch '{0}' must have the form <component>.<category>")]
    MissingCategory(String),
    /// The value after `=` was not a recognised boolean.
    #[error("invalid value '{value}' for switch '{key}' (expected on, off, true, false, 1 or 0)")]
    InvalidValue {
        /// Key part of the token.
        key: String,
        /// Rejected value.
        value: String,
    },
}

/// Operator request to set one switch, such as `net_client.Sockets=off`.
///
/// A token without `=value` turns the switch on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwitchToken {
    /// Switch addressed by the token.
    pub key: SwitchKey,
    /// Requested value.
    pub value: bool,
}

impl FromStr for SwitchToken {
    type Err = SwitchTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SwitchTokenError::Empty);
        }

        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value.trim())),
            None => (token, None),
        };

        let Some((component, category)) = key.split_once('.') else {
            return Err(SwitchTokenError::MissingCategory(key.to_owned()));
        };
        if component.is_empty() || category.is_empty() {
            return Err(SwitchTokenError::MissingCategory(key.to_owned()));
        }

        let value = match value {
            None => true,
            Some(text) => parse_switch_value(text).ok_or_else(|| SwitchTokenError::InvalidValue {
                key: key.to_owned(),
                value: text.to_owned(),
            })?,
        };

        Ok(Self {
            key: SwitchKey::new(&ComponentId::from(component), category),
            value,
        })
    }
}

/// Parses the boolean spellings accepted on the command line.
pub fn parse_switch_value(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
