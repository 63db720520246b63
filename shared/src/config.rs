use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formatter::Formatter;
use crate::types::{FormatPolicy, InputType};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid form input configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a `FormInput` is rendered with.
///
/// The formatter is code, not data, so it is skipped when (de)serializing
/// and has to be attached with [`FormInputConfig::with_formatter`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormInputConfig {
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub value: String,
    #[serde(skip)]
    pub formatter: Option<Formatter>,
    pub lazy_formatter: bool,
    pub no_wheel: bool,

    // Reflected onto the element as-is
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
}

impl FormInputConfig {
    pub fn new(input_type: impl Into<InputType>) -> Self {
        Self {
            input_type: input_type.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_formatter(mut self, formatter: impl Into<Formatter>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    pub fn with_lazy_formatter(mut self, lazy: bool) -> Self {
        self.lazy_formatter = lazy;
        self
    }

    pub fn with_no_wheel(mut self, no_wheel: bool) -> Self {
        self.no_wheel = no_wheel;
        self
    }

    pub fn format_policy(&self) -> FormatPolicy {
        FormatPolicy::from_lazy(self.lazy_formatter)
    }
}
