// ============================================================================
// APP VIEW - Pantalla completa de empleados
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::viewmodels::EmpleadoViewModel;
use crate::views::{
    render_confirm_dialog, render_empleado_dialog, render_empleado_table, render_toasts, render_toolbar,
};

/// Renderizar aplicación completa a partir del estado actual
pub fn render_app(vm: &EmpleadoViewModel) -> Result<Element, JsValue> {
    let state = vm.state();

    let container = ElementBuilder::new("div")?
        .class("empleados-app")
        .build();

    append_child(&container, &render_toolbar(vm)?)?;
    append_child(&container, &render_empleado_table(vm)?)?;

    if state.is_dialog_open() {
        append_child(&container, &render_empleado_dialog(vm)?)?;
    }

    let confirmacion = state.confirmacion.borrow().clone();
    if let Some(confirmacion) = confirmacion {
        append_child(&container, &render_confirm_dialog(vm, &confirmacion)?)?;
    }

    // Siempre presente: los toasts se actualizan incrementalmente
    append_child(&container, &render_toasts(vm)?)?;

    Ok(container)
}
