// ============================================================================
// TOAST VIEW - Notificaciones (esquina superior derecha)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::utils::constants::TOASTS_ID;
use crate::viewmodels::EmpleadoViewModel;

/// Contenedor de toasts; se actualiza incrementalmente
pub fn render_toasts(vm: &EmpleadoViewModel) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id(TOASTS_ID)?
        .class("toast-container")
        .build();
    fill_toasts(vm, &container)?;
    Ok(container)
}

pub fn fill_toasts(vm: &EmpleadoViewModel, container: &Element) -> Result<(), JsValue> {
    let toasts = vm.state().toasts.borrow().clone();
    for toast in toasts {
        let content = ElementBuilder::new("div")?
            .class("toast-content")
            .child(ElementBuilder::new("strong")?.text(&toast.summary).build())?
            .child(ElementBuilder::new("p")?.text(&toast.detail).build())?
            .build();

        let item = ElementBuilder::new("div")?
            .class(toast.severity.css_class())
            .attr("role", "alert")?
            .child(ElementBuilder::new("span")?.class("toast-icon").text(toast.severity.icon()).build())?
            .child(content)?
            .build();

        // Click = cerrar antes de tiempo
        {
            let vm = vm.clone();
            let id = toast.id;
            on_click(&item, move |_e| vm.dismiss_toast(id))?;
        }
        append_child(container, &item)?;
    }
    Ok(())
}
