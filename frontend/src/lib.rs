pub mod app;
pub mod components;
pub mod dom;

pub use components::FormInput;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    leptos::mount_to_body(app::App);
}
