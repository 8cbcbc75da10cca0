// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo.
// Así el input del filtro y los del diálogo conservan foco y cursor.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{get_element_by_id, set_checked, set_disabled, set_inner_html, set_text_content, toggle_class};
use crate::utils::constants::{DELETE_SELECTED_ID, SELECT_ALL_ID, TABLE_BODY_ID, TABLE_FOOTER_ID, TOASTS_ID};
use crate::viewmodels::EmpleadoViewModel;
use crate::views::dialog::NOMBRE_HINT_ID;
use crate::views::table::{fill_table_body, footer_text};
use crate::views::toast::fill_toasts;

/// Redibujar filas, checkbox de cabecera y footer
pub fn update_tabla(vm: &EmpleadoViewModel) -> Result<(), JsValue> {
    let state = vm.state();
    let Some(tbody) = get_element_by_id(TABLE_BODY_ID) else {
        log::warn!("⚠️ [UPDATE] #{} no encontrado", TABLE_BODY_ID);
        return Ok(());
    };
    set_inner_html(&tbody, "");
    fill_table_body(vm, &tbody)?;

    if let Some(select_all) = get_element_by_id(SELECT_ALL_ID) {
        set_checked(&select_all, state.all_visible_selected())?;
    }
    if let Some(footer) = get_element_by_id(TABLE_FOOTER_ID) {
        set_text_content(&footer, &footer_text(state));
    }
    Ok(())
}

/// Habilitar/deshabilitar "Eliminar" según la selección
pub fn update_toolbar(vm: &EmpleadoViewModel) -> Result<(), JsValue> {
    if let Some(button) = get_element_by_id(DELETE_SELECTED_ID) {
        set_disabled(&button, !vm.state().has_selection())?;
    }
    Ok(())
}

pub fn update_toasts(vm: &EmpleadoViewModel) -> Result<(), JsValue> {
    if let Some(container) = get_element_by_id(TOASTS_ID) {
        set_inner_html(&container, "");
        fill_toasts(vm, &container)?;
    }
    Ok(())
}

pub fn update_nombre_hint(vm: &EmpleadoViewModel) -> Result<(), JsValue> {
    if let Some(hint) = get_element_by_id(NOMBRE_HINT_ID) {
        toggle_class(&hint, "hidden", !vm.state().show_nombre_required())?;
    }
    Ok(())
}
