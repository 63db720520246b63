//! Binds the shared controller to a live `HtmlInputElement`.

use form_input_shared::InputElement;
use web_sys::{HtmlInputElement, Node};

/// A mounted `<input>` as seen by the controller.
#[derive(Clone)]
pub struct DomInput(HtmlInputElement);

impl DomInput {
    pub fn new(element: &HtmlInputElement) -> Self {
        Self(element.clone())
    }

    pub fn element(&self) -> &HtmlInputElement {
        &self.0
    }
}

impl InputElement for DomInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }

    fn blur(&self) {
        if let Err(e) = self.0.blur() {
            log::warn!("Failed to blur input: {:?}", e);
        }
    }

    fn is_focused(&self) -> bool {
        let node: &Node = self.0.as_ref();
        node.owner_document()
            .and_then(|document| document.active_element())
            .map(|active| active.is_same_node(Some(node)))
            .unwrap_or(false)
    }
}
