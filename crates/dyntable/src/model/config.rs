//! Table configuration.
//!
//! [`TableConfig`] is fixed when the model is created. Applications usually
//! build it in code, but it can also be read from a TOML or JSON document;
//! missing fields fall back to their defaults.
//!
//! ```
//! use dyntable::model::{KeyboardKind, TableConfig};
//!
//! let config = TableConfig::from_toml_str(r#"
//!     editable = false
//!     keyboard = "decimal_pad"
//! "#).unwrap();
//!
//! assert!(!config.editable);
//! assert_eq!(config.keyboard, KeyboardKind::DecimalPad);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Keyboard layout hint for cell editors.
///
/// The model never interprets this value; it is carried for the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardKind {
    /// The platform's default text keyboard.
    #[default]
    Default,
    /// Digits only.
    NumberPad,
    /// Digits and a decimal separator.
    DecimalPad,
}

/// Settings for a grid model, immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Whether cells and structure may be edited.
    pub editable: bool,
    /// Keyboard hint for cell editors.
    pub keyboard: KeyboardKind,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            editable: true,
            keyboard: KeyboardKind::default(),
        }
    }
}

impl TableConfig {
    /// Creates the default configuration: editable, default keyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for a read-only table.
    pub fn read_only() -> Self {
        Self {
            editable: false,
            ..Self::default()
        }
    }

    /// Sets whether the table is editable.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets the keyboard hint.
    pub fn with_keyboard(mut self, keyboard: KeyboardKind) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}
