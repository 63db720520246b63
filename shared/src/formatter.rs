use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Failure reported by a fallible formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("formatter rejected {input:?}: {message}")]
pub struct FormatError {
    pub input: String,
    pub message: String,
}

impl FormatError {
    pub fn new(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            message: message.into(),
        }
    }
}

type FormatFn = dyn Fn(&str) -> Result<String, FormatError>;

/// A caller-supplied transformation applied to the raw input text.
///
/// Cloning is cheap: clones share the same function.
#[derive(Clone)]
pub struct Formatter(Rc<FormatFn>);

impl Formatter {
    /// Wraps a formatter that cannot fail. A panic inside `f` is not caught.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        Self(Rc::new(move |value: &str| Ok(f(value))))
    }

    /// Wraps a formatter that may reject its input.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<String, FormatError> + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn apply(&self, value: &str) -> Result<String, FormatError> {
        (self.0)(value)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

impl<F> From<F> for Formatter
where
    F: Fn(&str) -> String + 'static,
{
    fn from(f: F) -> Self {
        Formatter::new(f)
    }
}
