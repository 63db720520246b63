//! Event routing for a single `<input>` element.
//!
//! The controller holds no DOM handle of its own. Every handler receives
//! the element it acts on through the [`InputElement`] seam, so the same
//! rules run against a real `HtmlInputElement` in the browser and against
//! an in-memory element in tests.

use std::rc::Rc;

use crate::config::FormInputConfig;
use crate::formatter::Formatter;
use crate::types::{FormatPolicy, InputType, NativeEventKind, ValueEvent};

/// The operations the controller needs from the rendered `<input>`.
pub trait InputElement {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    /// Removes focus. On a focused element the host dispatches `blur`.
    fn blur(&self);
    fn is_focused(&self) -> bool;
}

/// Callback slots, split into the two output channels.
///
/// `input` and `change` receive the (possibly formatted) value. `focus` and
/// `blur` receive the host's raw event object `N` untouched.
pub struct Listeners<N> {
    pub input: Option<Rc<dyn Fn(String)>>,
    pub change: Option<Rc<dyn Fn(String)>>,
    pub focus: Option<Rc<dyn Fn(&N)>>,
    pub blur: Option<Rc<dyn Fn(&N)>>,
}

impl<N> Default for Listeners<N> {
    fn default() -> Self {
        Self {
            input: None,
            change: None,
            focus: None,
            blur: None,
        }
    }
}

impl<N> Clone for Listeners<N> {
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            change: self.change.clone(),
            focus: self.focus.clone(),
            blur: self.blur.clone(),
        }
    }
}

impl<N> Listeners<N> {
    pub fn on_input(mut self, f: impl Fn(String) + 'static) -> Self {
        self.input = Some(Rc::new(f));
        self
    }

    pub fn on_change(mut self, f: impl Fn(String) + 'static) -> Self {
        self.change = Some(Rc::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl Fn(&N) + 'static) -> Self {
        self.focus = Some(Rc::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl Fn(&N) + 'static) -> Self {
        self.blur = Some(Rc::new(f));
        self
    }
}

/// What a `wheel` event led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Not a numeric input, or wheel suppression is off.
    Ignored,
    /// The field was not focused, so the wheel cannot change its value.
    NotFocused,
    /// The field was blurred to keep the wheel from changing its value.
    Blurred,
}

pub struct FormInputController<N> {
    input_type: InputType,
    formatter: Option<Formatter>,
    policy: FormatPolicy,
    no_wheel: bool,
    listeners: Listeners<N>,
}

impl<N> FormInputController<N> {
    pub fn new(config: &FormInputConfig, listeners: Listeners<N>) -> Self {
        Self {
            input_type: config.input_type.clone(),
            formatter: config.formatter.clone(),
            policy: config.format_policy(),
            no_wheel: config.no_wheel,
            listeners,
        }
    }

    pub fn input_type(&self) -> &InputType {
        &self.input_type
    }

    pub fn policy(&self) -> FormatPolicy {
        self.policy
    }

    /// Applies the formatter, falling back to the raw value when it fails.
    pub fn format(&self, value: &str) -> String {
        let Some(formatter) = &self.formatter else {
            return value.to_string();
        };
        match formatter.apply(value) {
            Ok(formatted) => formatted,
            Err(e) => {
                log::warn!("{}; emitting raw value", e);
                value.to_string()
            }
        }
    }

    /// Handles a native `input` event and returns the emitted event.
    pub fn handle_input(&self, element: &impl InputElement) -> ValueEvent {
        let value = self.read(element, FormatPolicy::Eager);
        self.emit(ValueEvent::Input(value))
    }

    /// Handles a native `change` event and returns the emitted event.
    pub fn handle_change(&self, element: &impl InputElement) -> ValueEvent {
        let value = self.read(element, FormatPolicy::Lazy);
        self.emit(ValueEvent::Change(value))
    }

    pub fn handle_native(&self, kind: NativeEventKind, event: &N) {
        let listener = match kind {
            NativeEventKind::Focus => &self.listeners.focus,
            NativeEventKind::Blur => &self.listeners.blur,
        };
        if let Some(listener) = listener {
            listener(event);
        }
    }

    pub fn handle_focus(&self, event: &N) {
        self.handle_native(NativeEventKind::Focus, event);
    }

    pub fn handle_blur(&self, event: &N) {
        self.handle_native(NativeEventKind::Blur, event);
    }

    pub fn handle_wheel(&self, element: &impl InputElement) -> WheelOutcome {
        if !self.input_type.is_numeric() || !self.no_wheel {
            return WheelOutcome::Ignored;
        }
        if !element.is_focused() {
            return WheelOutcome::NotFocused;
        }
        log::debug!("suppressing wheel on focused {} input", self.input_type);
        element.blur();
        WheelOutcome::Blurred
    }

    /// Writes an externally supplied value into the element without emitting.
    pub fn sync_value(&self, element: &impl InputElement, value: &str) {
        if element.value() != value {
            element.set_value(value);
        }
    }

    /// Reads the element value, formatting it (and writing the result back)
    /// only when `phase` is the configured policy.
    fn read(&self, element: &impl InputElement, phase: FormatPolicy) -> String {
        let raw = element.value();
        if self.formatter.is_none() || self.policy != phase {
            return raw;
        }
        let formatted = self.format(&raw);
        if formatted != raw {
            element.set_value(&formatted);
        }
        formatted
    }

    fn emit(&self, event: ValueEvent) -> ValueEvent {
        let listener = match &event {
            ValueEvent::Input(_) => &self.listeners.input,
            ValueEvent::Change(_) => &self.listeners.change,
        };
        if let Some(listener) = listener {
            listener(event.value().to_string());
        }
        event
    }
}
