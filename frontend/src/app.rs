use leptos::*;

use crate::components::FormInput;

/// Playground page showing each formatting and wheel mode side by side.
#[component]
pub fn App() -> impl IntoView {
    let last_input = create_rw_signal(String::new());
    let last_change = create_rw_signal(String::new());
    let blur_count = create_rw_signal(0usize);

    let on_input = Callback::new(move |v: String| last_input.set(v));
    let on_change = Callback::new(move |v: String| last_change.set(v));
    let on_blur = Callback::new(move |_: web_sys::FocusEvent| blur_count.update(|n| *n += 1));

    view! {
        <main class="playground">
            <div class="form-group">
                <label class="form-label" for="eager">"Lowercase while typing"</label>
                <FormInput
                    id="eager"
                    formatter=|v: &str| v.to_lowercase()
                    on_input=on_input
                    on_change=on_change
                />
            </div>
            <div class="form-group">
                <label class="form-label" for="lazy">"Lowercase on commit"</label>
                <FormInput
                    id="lazy"
                    formatter=|v: &str| v.to_lowercase()
                    lazy_formatter=true
                    on_input=on_input
                    on_change=on_change
                />
            </div>
            <div class="form-group">
                <label class="form-label" for="amount">"Amount (wheel blurs)"</label>
                <FormInput
                    id="amount"
                    input_type="number"
                    value="123"
                    no_wheel=true
                    on_input=on_input
                    on_change=on_change
                    on_blur=on_blur
                />
            </div>
            <dl>
                <dt>"input"</dt>
                <dd>{move || last_input.get()}</dd>
                <dt>"change"</dt>
                <dd>{move || last_change.get()}</dd>
                <dt>"blur"</dt>
                <dd>{move || blur_count.get()}</dd>
            </dl>
        </main>
    }
}
