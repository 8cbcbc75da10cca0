// ============================================================================
// EMPLEADOS ADMIN - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: lógica de la pantalla
// - Services: SOLO comunicación API
// - State: Rc<RefCell> + subscribers
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

// Instancia global de App (single-threaded)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 [MAIN] Empleados Admin ({}) → {}", CONFIG.environment, CONFIG.api_url());

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        let mut slot = app_cell.borrow_mut();
        let app = slot.insert(app);
        app.start();
    });

    Ok(())
}

/// Re-render completo (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con el tipo de update indicado
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let Ok(mut slot) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [UPDATE] App ocupada, update descartado: {:?}", update_type);
            return;
        };
        let Some(app) = slot.as_mut() else {
            log::warn!("⚠️ [UPDATE] App no está inicializada");
            return;
        };

        let result = match update_type {
            UpdateType::Incremental(inc_type) => app.update_incremental(inc_type),
            UpdateType::FullRender => app.render(),
        };
        if let Err(e) = result {
            log::error!("❌ [UPDATE] Error aplicando {:?}: {:?}", update_type, e);
        }
    });
}
