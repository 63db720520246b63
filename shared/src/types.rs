use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Input Types
// ============================================================================

/// The `type` attribute of the rendered `<input>`.
///
/// Unknown types are kept verbatim in `Other` so the attribute written to
/// the DOM always matches what the caller configured.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Url,
    Tel,
    Search,
    Range,
    Color,
    Date,
    Time,
    DatetimeLocal,
    Month,
    Week,
    Other(String),
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Url => "url",
            InputType::Tel => "tel",
            InputType::Search => "search",
            InputType::Range => "range",
            InputType::Color => "color",
            InputType::Date => "date",
            InputType::Time => "time",
            InputType::DatetimeLocal => "datetime-local",
            InputType::Month => "month",
            InputType::Week => "week",
            InputType::Other(s) => s,
        }
    }

    /// Whether mouse-wheel scrolling over a focused field changes its value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, InputType::Number)
    }
}

impl FromStr for InputType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "text" => InputType::Text,
            "password" => InputType::Password,
            "email" => InputType::Email,
            "number" => InputType::Number,
            "url" => InputType::Url,
            "tel" => InputType::Tel,
            "search" => InputType::Search,
            "range" => InputType::Range,
            "color" => InputType::Color,
            "date" => InputType::Date,
            "time" => InputType::Time,
            "datetime-local" => InputType::DatetimeLocal,
            "month" => InputType::Month,
            "week" => InputType::Week,
            _ => InputType::Other(s.to_string()),
        })
    }
}

impl From<&str> for InputType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<String> for InputType {
    fn from(s: String) -> Self {
        InputType::from(s.as_str())
    }
}

impl From<InputType> for String {
    fn from(t: InputType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Format Policy
// ============================================================================

/// When the formatter runs. Fixed for the lifetime of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatPolicy {
    /// Format on every `input` event.
    #[default]
    Eager,
    /// Format only when the value is committed with `change`.
    Lazy,
}

impl FormatPolicy {
    pub fn from_lazy(lazy: bool) -> Self {
        if lazy {
            FormatPolicy::Lazy
        } else {
            FormatPolicy::Eager
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// Semantic value-change events emitted by the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "lowercase")]
pub enum ValueEvent {
    Input(String),
    Change(String),
}

impl ValueEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ValueEvent::Input(_) => "input",
            ValueEvent::Change(_) => "change",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ValueEvent::Input(v) | ValueEvent::Change(v) => v,
        }
    }
}

/// Native DOM events forwarded untouched to passthrough listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeEventKind {
    Focus,
    Blur,
}

impl NativeEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            NativeEventKind::Focus => "focus",
            NativeEventKind::Blur => "blur",
        }
    }
}
