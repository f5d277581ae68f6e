// ============================================================================
// ATTENDANCE PWA - client core
// ============================================================================
// - views: render DOM, no business logic
// - hooks: controller logic (recovery wizard, attendance monitor, toasts)
// - state: pure reducers, one per controller
// - services: backend + offline storage access only
// ============================================================================

pub mod app;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Attendance PWA starting");

    yew::Renderer::<App>::new().render();
    Ok(())
}
