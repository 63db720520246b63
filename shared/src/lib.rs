pub mod config;
pub mod controller;
pub mod formatter;
pub mod types;

pub use config::{ConfigError, FormInputConfig};
pub use controller::{FormInputController, InputElement, Listeners, WheelOutcome};
pub use formatter::{FormatError, Formatter};
pub use types::{FormatPolicy, InputType, NativeEventKind, ValueEvent};
