// ============================================================================
// EMPLEADO DIALOG VIEW - Formulario de alta/edición
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, on_click, on_input, set_attribute, set_input_value, ElementBuilder,
};
use crate::models::Campo;
use crate::utils::i18n::t;
use crate::viewmodels::EmpleadoViewModel;

pub const NOMBRE_INPUT_ID: &str = "empleado-nombre";
pub const NOMBRE_HINT_ID: &str = "empleado-nombre-hint";

/// Renderizar diálogo modal del empleado en edición
pub fn render_empleado_dialog(vm: &EmpleadoViewModel) -> Result<Element, JsValue> {
    let state = vm.state();
    let lang = state.lang();

    let mask = ElementBuilder::new("div")?
        .class("dialog-mask")
        .build();

    let dialog = ElementBuilder::new("div")?
        .class("dialog empleado-dialog")
        .attr("role", "dialog")?
        .build();

    // Header
    let close_btn = ElementBuilder::new("button")?
        .class("btn-close-dialog")
        .text("✕")
        .build();
    {
        let vm = vm.clone();
        on_click(&close_btn, move |_e| vm.hide_dialog())?;
    }
    let header = ElementBuilder::new("div")?
        .class("dialog-header")
        .child(ElementBuilder::new("h3")?.text(&t("detalle_empleado", &lang)).build())?
        .child(close_btn)?
        .build();
    append_child(&dialog, &header)?;

    // Body
    let body = ElementBuilder::new("div")?
        .class("dialog-body")
        .build();

    let nombre = render_field(vm, Campo::Nombre, "nombre", NOMBRE_INPUT_ID, &lang)?;
    let hint = ElementBuilder::new("small")?
        .id(NOMBRE_HINT_ID)?
        .class(if state.show_nombre_required() { "error-hint" } else { "error-hint hidden" })
        .text(&t("nombre_obligatorio", &lang))
        .build();
    append_child(&nombre, &hint)?;
    append_child(&body, &nombre)?;
    append_child(&body, &render_field(vm, Campo::Direccion, "direccion", "empleado-direccion", &lang)?)?;
    append_child(&body, &render_field(vm, Campo::Telefono, "telefono", "empleado-telefono", &lang)?)?;
    append_child(&dialog, &body)?;

    // Footer
    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-text")
        .text(&format!("✕ {}", t("cancelar", &lang)))
        .build();
    {
        let vm = vm.clone();
        on_click(&cancel_btn, move |_e| vm.hide_dialog())?;
    }

    let save_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(&format!("✔ {}", t("guardar", &lang)))
        .disabled(*state.saving.borrow())?
        .build();
    {
        let vm = vm.clone();
        on_click(&save_btn, move |_e| {
            let vm = vm.clone();
            spawn_local(async move { vm.save_empleado().await });
        })?;
    }

    let footer = ElementBuilder::new("div")?
        .class("dialog-footer")
        .child(cancel_btn)?
        .child(save_btn)?
        .build();
    append_child(&dialog, &footer)?;

    append_child(&mask, &dialog)?;
    Ok(mask)
}

fn render_field(
    vm: &EmpleadoViewModel,
    campo: Campo,
    label_key: &str,
    input_id: &str,
    lang: &str,
) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?
        .attr("for", input_id)?
        .text(&t(label_key, lang))
        .build();

    let input = ElementBuilder::new("input")?
        .id(input_id)?
        .attr("type", "text")?
        .attr("autocomplete", "off")?
        .build();
    if campo == Campo::Nombre {
        set_attribute(&input, "required", "")?;
    }
    set_input_value(&input, vm.state().empleado.borrow().campo(campo))?;
    {
        let vm = vm.clone();
        on_input(&input, move |value| vm.update_field(campo, value))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("field")
        .child(label)?
        .child(input)?
        .build())
}
