// ============================================================================
// TOOLBAR VIEW - Nuevo / Eliminar seleccionados
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::utils::constants::DELETE_SELECTED_ID;
use crate::utils::i18n::t;
use crate::viewmodels::EmpleadoViewModel;

pub fn render_toolbar(vm: &EmpleadoViewModel) -> Result<Element, JsValue> {
    let state = vm.state();
    let lang = state.lang();

    let new_btn = ElementBuilder::new("button")?
        .class("btn btn-success")
        .text(&format!("＋ {}", t("nuevo", &lang)))
        .build();
    {
        let vm = vm.clone();
        on_click(&new_btn, move |_e| vm.open_new())?;
    }

    let delete_btn = ElementBuilder::new("button")?
        .id(DELETE_SELECTED_ID)?
        .class("btn btn-danger")
        .text(&format!("🗑️ {}", t("eliminar", &lang)))
        .disabled(!state.has_selection())?
        .build();
    {
        let vm = vm.clone();
        on_click(&delete_btn, move |_e| vm.delete_selected_empleados())?;
    }

    Ok(ElementBuilder::new("div")?
        .class("toolbar")
        .child(new_btn)?
        .child(delete_btn)?
        .build())
}
