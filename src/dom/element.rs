// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Agregar o quitar una clase según `on`
pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    let classes = element.class_list();
    if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    }
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Atributo `disabled` de botones
pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    }
}

/// Propiedad `checked` de un checkbox (el atributo solo fija el valor inicial)
pub fn set_checked(element: &Element, checked: bool) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlInputElement"))?
        .set_checked(checked);
    Ok(())
}

/// Propiedad `value` de un input
pub fn set_input_value(element: &Element, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlInputElement"))?
        .set_value(value);
    Ok(())
}

/// Dar foco a un elemento por ID (si existe)
pub fn focus_by_id(id: &str) -> Result<(), JsValue> {
    if let Some(element) = get_element_by_id(id) {
        element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
            .focus()?;
    }
    Ok(())
}
