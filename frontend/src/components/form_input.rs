use std::rc::Rc;

use form_input_shared::{FormInputConfig, FormInputController, Formatter, InputType, Listeners};
use leptos::*;
use web_sys::FocusEvent;

use crate::dom::DomInput;

/// Form input that routes DOM events through an optional formatter.
///
/// `on_input` and `on_change` receive the value after formatting. `on_focus`
/// and `on_blur` receive the browser's event untouched. With `no_wheel` on a
/// number input, scrolling over the focused field blurs it instead of
/// stepping the value.
#[component]
pub fn FormInput(
    #[prop(optional, into)] input_type: Option<InputType>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] formatter: Option<Formatter>,
    #[prop(optional)] lazy_formatter: bool,
    #[prop(optional)] no_wheel: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional, into)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let config = FormInputConfig {
        input_type: input_type.unwrap_or_default(),
        value: value.get_untracked(),
        formatter,
        lazy_formatter,
        no_wheel,
        id,
        name,
        placeholder,
        autocomplete,
        disabled,
        readonly,
        required,
    };

    let mut listeners = Listeners::<FocusEvent>::default();
    if let Some(cb) = on_input {
        listeners = listeners.on_input(move |v| cb.call(v));
    }
    if let Some(cb) = on_change {
        listeners = listeners.on_change(move |v| cb.call(v));
    }
    if let Some(cb) = on_focus {
        listeners = listeners.on_focus(move |ev: &FocusEvent| cb.call(ev.clone()));
    }
    if let Some(cb) = on_blur {
        listeners = listeners.on_blur(move |ev: &FocusEvent| cb.call(ev.clone()));
    }

    let controller = Rc::new(FormInputController::new(&config, listeners));
    let node_ref = node_ref.unwrap_or_else(create_node_ref::<html::Input>);
    let element = move |event: &str| {
        let element = node_ref.get_untracked().map(|el| DomInput::new(&el));
        if element.is_none() {
            log::debug!("Dropping {} event: input is not mounted", event);
        }
        element
    };

    {
        let controller = controller.clone();
        create_effect(move |_| {
            let next = value.get();
            if let Some(el) = node_ref.get() {
                controller.sync_value(&DomInput::new(&el), &next);
            }
        });
    }

    let on_input_event = {
        let controller = controller.clone();
        move |_: ev::Event| {
            if let Some(el) = element("input") {
                controller.handle_input(&el);
            }
        }
    };
    let on_change_event = {
        let controller = controller.clone();
        move |_: ev::Event| {
            if let Some(el) = element("change") {
                controller.handle_change(&el);
            }
        }
    };
    let on_focus_event = {
        let controller = controller.clone();
        move |ev: FocusEvent| controller.handle_focus(&ev)
    };
    let on_blur_event = {
        let controller = controller.clone();
        move |ev: FocusEvent| controller.handle_blur(&ev)
    };
    let on_wheel_event = move |_: ev::WheelEvent| {
        if let Some(el) = element("wheel") {
            controller.handle_wheel(&el);
        }
    };

    view! {
        <input
            type=config.input_type.to_string()
            id=config.id
            name=config.name
            placeholder=config.placeholder
            autocomplete=config.autocomplete
            disabled=config.disabled
            readonly=config.readonly
            required=config.required
            value=config.value
            node_ref=node_ref
            on:input=on_input_event
            on:change=on_change_event
            on:focus=on_focus_event
            on:blur=on_blur_event
            on:wheel=on_wheel_event
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, WheelEvent, WheelEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount<F, N>(f: F) -> HtmlInputElement
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        let document = document();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone(), f);
        container
            .query_selector("input")
            .unwrap()
            .unwrap()
            .unchecked_into::<HtmlInputElement>()
    }

    fn fire(input: &HtmlInputElement, name: &str) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict(name, &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    fn fire_wheel(input: &HtmlInputElement) {
        let init = WheelEventInit::new();
        init.set_bubbles(true);
        init.set_delta_y(33.33);
        let event = WheelEvent::new_with_event_init_dict("wheel", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, Callback<String>) {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        (values, Callback::new(move |v: String| sink.borrow_mut().push(v)))
    }

    fn focus_counter() -> (Rc<RefCell<usize>>, Callback<FocusEvent>) {
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        (count, Callback::new(move |_: FocusEvent| *sink.borrow_mut() += 1))
    }

    #[wasm_bindgen_test]
    fn test_emits_input_event() {
        let (inputs, on_input) = recorder();
        let input = mount(move || view! { <FormInput on_input=on_input/> });

        input.set_value("test");
        fire(&input, "input");

        assert_eq!(*inputs.borrow(), vec!["test".to_string()]);
    }

    #[wasm_bindgen_test]
    fn test_focus_is_native_passthrough() {
        let (inputs, on_input) = recorder();
        let (focused, on_focus) = focus_counter();
        let input = mount(move || view! { <FormInput on_input=on_input on_focus=on_focus/> });

        fire(&input, "focus");

        assert_eq!(*focused.borrow(), 1);
        assert!(inputs.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_blur_is_native_passthrough() {
        let (changes, on_change) = recorder();
        let (blurred, on_blur) = focus_counter();
        let input = mount(move || view! { <FormInput on_change=on_change on_blur=on_blur/> });

        fire(&input, "blur");

        assert_eq!(*blurred.borrow(), 1);
        assert!(changes.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_applies_formatter_on_input() {
        let (inputs, on_input) = recorder();
        let input = mount(move || {
            view! { <FormInput formatter=|v: &str| v.to_lowercase() on_input=on_input/> }
        });

        input.set_value("TEST");
        fire(&input, "input");

        assert_eq!(*inputs.borrow(), vec!["test".to_string()]);
        assert_eq!(input.value(), "test");
    }

    #[wasm_bindgen_test]
    fn test_lazy_formatter_applied_on_change() {
        let (inputs, on_input) = recorder();
        let (changes, on_change) = recorder();
        let input = mount(move || {
            view! {
                <FormInput
                    formatter=|v: &str| v.to_lowercase()
                    lazy_formatter=true
                    on_input=on_input
                    on_change=on_change
                />
            }
        });

        input.set_value("TEST");
        fire(&input, "input");
        assert_ne!(inputs.borrow()[0], "test");

        fire(&input, "change");
        assert_eq!(*changes.borrow(), vec!["test".to_string()]);
    }

    #[wasm_bindgen_test]
    fn test_no_wheel_blurs_focused_number_input() {
        let (blurred, on_blur) = focus_counter();
        let input = mount(move || {
            view! { <FormInput input_type="number" value="123" no_wheel=true on_blur=on_blur/> }
        });
        assert_eq!(input.type_(), "number");

        input.focus().unwrap();
        fire_wheel(&input);

        assert_eq!(*blurred.borrow(), 1);
    }

    #[wasm_bindgen_test]
    fn test_wheel_allowed_when_no_wheel_is_false() {
        let (blurred, on_blur) = focus_counter();
        let input = mount(move || {
            view! { <FormInput input_type="number" value="123" no_wheel=false on_blur=on_blur/> }
        });
        assert_eq!(input.type_(), "number");

        input.focus().unwrap();
        fire_wheel(&input);

        assert_eq!(*blurred.borrow(), 0);
    }

    #[wasm_bindgen_test]
    fn test_reflects_configured_type_and_attributes() {
        let input = mount(|| {
            view! { <FormInput input_type="email" value="a@b.c" placeholder="Email" required=true/> }
        });

        assert_eq!(input.type_(), "email");
        assert_eq!(input.value(), "a@b.c");
        assert_eq!(input.placeholder(), "Email");
        assert!(input.required());
    }

    #[wasm_bindgen_test]
    fn test_external_value_updates_display_without_emitting() {
        let (inputs, on_input) = recorder();
        let value = create_rw_signal("first".to_string());
        let input = mount(move || view! { <FormInput value=value on_input=on_input/> });

        value.set("second".to_string());

        assert_eq!(input.value(), "second");
        assert!(inputs.borrow().is_empty());
    }
}
