// ============================================================================
// CONFIRM DIALOG VIEW - Confirmación Sí/No antes de eliminar
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Confirmacion;
use crate::utils::i18n::t;
use crate::viewmodels::EmpleadoViewModel;

pub fn render_confirm_dialog(vm: &EmpleadoViewModel, confirmacion: &Confirmacion) -> Result<Element, JsValue> {
    let lang = vm.state().lang();

    let dialog = ElementBuilder::new("div")?
        .class("dialog confirm-dialog")
        .attr("role", "alertdialog")?
        .build();

    let header = ElementBuilder::new("div")?
        .class("dialog-header")
        .child(ElementBuilder::new("h3")?.text(&confirmacion.header).build())?
        .build();
    append_child(&dialog, &header)?;

    let body = ElementBuilder::new("div")?
        .class("dialog-body confirm-body")
        .child(ElementBuilder::new("span")?.class("confirm-icon").text("⚠️").build())?
        .child(ElementBuilder::new("span")?.text(&confirmacion.message).build())?
        .build();
    append_child(&dialog, &body)?;

    let no_btn = ElementBuilder::new("button")?
        .class("btn btn-text")
        .text(&t("no", &lang))
        .build();
    {
        let vm = vm.clone();
        on_click(&no_btn, move |_e| vm.reject_confirmation())?;
    }

    let yes_btn = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text(&t("si", &lang))
        .build();
    {
        let vm = vm.clone();
        on_click(&yes_btn, move |_e| {
            let vm = vm.clone();
            spawn_local(async move { vm.accept_confirmation().await });
        })?;
    }

    let footer = ElementBuilder::new("div")?
        .class("dialog-footer")
        .child(no_btn)?
        .child(yes_btn)?
        .build();
    append_child(&dialog, &footer)?;

    Ok(ElementBuilder::new("div")?
        .class("dialog-mask")
        .child(dialog)?
        .build())
}
