// ============================================================================
// EMPLEADO TABLE VIEW - Tabla con filtro global y selección múltiple
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_change, on_click, on_input, set_input_value, ElementBuilder};
use crate::models::Empleado;
use crate::state::AppState;
use crate::utils::constants::{GLOBAL_FILTER_ID, SELECT_ALL_ID, TABLE_BODY_ID, TABLE_FOOTER_ID};
use crate::utils::i18n::{t, t_with};
use crate::viewmodels::EmpleadoViewModel;

const COLUMNAS: [&str; 4] = ["id", "nombre", "direccion", "telefono"];

/// Renderizar tabla completa (caption, cabecera, filas y footer)
pub fn render_empleado_table(vm: &EmpleadoViewModel) -> Result<Element, JsValue> {
    let state = vm.state();
    let lang = state.lang();

    let card = ElementBuilder::new("div")?
        .class("card table-card")
        .build();

    append_child(&card, &render_caption(vm, &lang)?)?;

    let table = ElementBuilder::new("table")?
        .class("empleados-table")
        .build();
    append_child(&table, &render_header(vm, &lang)?)?;

    let tbody = ElementBuilder::new("tbody")?
        .id(TABLE_BODY_ID)?
        .build();
    fill_table_body(vm, &tbody)?;
    append_child(&table, &tbody)?;
    append_child(&card, &table)?;

    let footer = ElementBuilder::new("div")?
        .id(TABLE_FOOTER_ID)?
        .class("table-footer")
        .text(&footer_text(state))
        .build();
    append_child(&card, &footer)?;

    Ok(card)
}

/// Título + input de búsqueda global
fn render_caption(vm: &EmpleadoViewModel, lang: &str) -> Result<Element, JsValue> {
    let caption = ElementBuilder::new("div")?
        .class("table-caption")
        .child(ElementBuilder::new("h5")?.text(&t("titulo", lang)).build())?
        .build();

    let input = ElementBuilder::new("input")?
        .id(GLOBAL_FILTER_ID)?
        .attr("type", "search")?
        .attr("placeholder", &t("buscar", lang))?
        .build();
    set_input_value(&input, &vm.state().global_filter.borrow())?;
    {
        let vm = vm.clone();
        on_input(&input, move |value| vm.filter_global(&value))?;
    }

    let search = ElementBuilder::new("span")?
        .class("search-box")
        .child(ElementBuilder::new("span")?.class("search-icon").text("🔍").build())?
        .child(input)?
        .build();
    append_child(&caption, &search)?;

    Ok(caption)
}

fn render_header(vm: &EmpleadoViewModel, lang: &str) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();

    let select_all = ElementBuilder::new("input")?
        .id(SELECT_ALL_ID)?
        .attr("type", "checkbox")?
        .attr("title", &t("seleccionar_todos", lang))?
        .checked(vm.state().all_visible_selected())?
        .build();
    {
        let vm = vm.clone();
        on_change(&select_all, move |_e| vm.toggle_select_all())?;
    }
    let th = ElementBuilder::new("th")?
        .class("col-check")
        .child(select_all)?
        .build();
    append_child(&row, &th)?;

    for columna in COLUMNAS {
        let th = ElementBuilder::new("th")?.text(&t(columna, lang)).build();
        append_child(&row, &th)?;
    }
    let th = ElementBuilder::new("th")?
        .class("col-actions")
        .text(&t("acciones", lang))
        .build();
    append_child(&row, &th)?;

    Ok(ElementBuilder::new("thead")?.child(row)?.build())
}

/// Rellenar `<tbody>` con las filas visibles (también desde update incremental)
pub fn fill_table_body(vm: &EmpleadoViewModel, tbody: &Element) -> Result<(), JsValue> {
    let state = vm.state();
    let lang = state.lang();
    let visibles = state.visible_empleados();

    if visibles.is_empty() {
        let key = if *state.loading.borrow() { "cargando" } else { "sin_empleados" };
        let td = ElementBuilder::new("td")?
            .class("empty-message")
            .attr("colspan", &(COLUMNAS.len() + 2).to_string())?
            .text(&t(key, &lang))
            .build();
        append_child(tbody, &ElementBuilder::new("tr")?.child(td)?.build())?;
        return Ok(());
    }

    for empleado in &visibles {
        append_child(tbody, &render_row(vm, empleado, &lang)?)?;
    }
    Ok(())
}

fn render_row(vm: &EmpleadoViewModel, empleado: &Empleado, lang: &str) -> Result<Element, JsValue> {
    let selected = vm.state().is_selected(empleado);
    let row = ElementBuilder::new("tr")?
        .class(if selected { "row row--selected" } else { "row" })
        .build();

    let checkbox = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .checked(selected)?
        .build();
    {
        let vm = vm.clone();
        let empleado = empleado.clone();
        on_change(&checkbox, move |_e| vm.toggle_selected(&empleado))?;
    }
    append_child(&row, &ElementBuilder::new("td")?.child(checkbox)?.build())?;

    let id = empleado.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    for valor in [id.as_str(), empleado.nombre.as_str(), empleado.direccion.as_str(), empleado.telefono.as_str()] {
        append_child(&row, &ElementBuilder::new("td")?.text(valor).build())?;
    }

    let edit_btn = ElementBuilder::new("button")?
        .class("btn-icon btn-edit")
        .attr("title", &t("editar", lang))?
        .text("✏️")
        .build();
    {
        let vm = vm.clone();
        let empleado = empleado.clone();
        on_click(&edit_btn, move |_e| vm.edit_empleado(&empleado))?;
    }

    let delete_btn = ElementBuilder::new("button")?
        .class("btn-icon btn-delete")
        .attr("title", &t("eliminar", lang))?
        .text("🗑️")
        .build();
    {
        let vm = vm.clone();
        let empleado = empleado.clone();
        on_click(&delete_btn, move |_e| vm.delete_empleado(&empleado))?;
    }

    let actions = ElementBuilder::new("td")?
        .class("col-actions")
        .child(edit_btn)?
        .child(delete_btn)?
        .build();
    append_child(&row, &actions)?;

    Ok(row)
}

/// "En total hay N empleados."
pub fn footer_text(state: &AppState) -> String {
    let total = state.empleados.borrow().len();
    t_with("total", &state.lang(), "n", &total.to_string())
}
