// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::incremental::{update_nombre_hint, update_tabla, update_toasts, update_toolbar};
use crate::dom::{append_child, focus_by_id, get_element_by_id, set_inner_html};
use crate::state::{AppState, IncrementalUpdate, RenderQueue};
use crate::utils::constants::ROOT_ID;
use crate::viewmodels::EmpleadoViewModel;
use crate::views::{render_app, NOMBRE_INPUT_ID};

/// Aplicación principal
pub struct App {
    vm: EmpleadoViewModel,
    root: Element,
    dialog_was_open: bool,
}

impl App {
    /// Crear nueva aplicación montada en `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Los updates del mismo tick se acumulan en la cola y se aplican
        // juntos en un único Timeout(0)
        let cola = Rc::new(RenderQueue::new());
        state.subscribe_to_changes(move |update_type| {
            if !cola.push(update_type) {
                return;
            }
            let cola = cola.clone();
            Timeout::new(0, move || {
                for update in cola.take() {
                    crate::rerender_app_with_type(update);
                }
            })
            .forget();
        });

        Ok(Self {
            vm: EmpleadoViewModel::new(state),
            root,
            dialog_was_open: false,
        })
    }

    /// Carga inicial de la lista
    pub fn start(&self) {
        let vm = self.vm.clone();
        spawn_local(async move {
            vm.load_empleados().await;
        });
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.vm)?;
        append_child(&self.root, &view)?;

        // Foco en "nombre" solo al abrir el diálogo
        let dialog_open = self.vm.state().is_dialog_open();
        if dialog_open && !self.dialog_was_open {
            focus_by_id(NOMBRE_INPUT_ID)?;
        }
        self.dialog_was_open = dialog_open;
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::Tabla => update_tabla(&self.vm),
            IncrementalUpdate::Toolbar => update_toolbar(&self.vm),
            IncrementalUpdate::Toasts => update_toasts(&self.vm),
            IncrementalUpdate::NombreHint => update_nombre_hint(&self.vm),
        }
    }
}
