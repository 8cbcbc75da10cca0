// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Toolbar y tabla
            translations.insert("titulo", "Employee Management");
            translations.insert("nuevo", "New");
            translations.insert("eliminar", "Delete");
            translations.insert("editar", "Edit");
            translations.insert("buscar", "Search...");
            translations.insert("id", "ID");
            translations.insert("nombre", "Name");
            translations.insert("direccion", "Address");
            translations.insert("telefono", "Phone");
            translations.insert("acciones", "Actions");
            translations.insert("sin_empleados", "No employees found.");
            translations.insert("cargando", "Loading employees...");
            translations.insert("total", "In total there are {n} employees.");
            translations.insert("seleccionar_todos", "Select all");

            // Diálogo
            translations.insert("detalle_empleado", "Employee Details");
            translations.insert("nombre_obligatorio", "Name is required.");
            translations.insert("cancelar", "Cancel");
            translations.insert("guardar", "Save");

            // Confirmación
            translations.insert("confirmar", "Confirm");
            translations.insert("si", "Yes");
            translations.insert("no", "No");
            translations.insert("confirmar_eliminar", "Are you sure you want to delete {nombre}?");
            translations.insert("confirmar_eliminar_seleccionados", "Are you sure you want to delete the selected employees?");

            // Toasts
            translations.insert("exito", "Success");
            translations.insert("error", "Error");
            translations.insert("empleado_eliminado", "Employee Deleted");
            translations.insert("empleados_eliminados", "Employees Deleted");
            translations.insert("empleados_eliminados_n", "{n} employees deleted");
            translations.insert("empleado_actualizado", "Employee Updated");
            translations.insert("empleado_creado", "Employee Created");
            translations.insert("aviso", "Warning");
            translations.insert("filas_sin_id", "{n} rows have no id and cannot be deleted");
        }
        "ES" | _ => {
            // Toolbar y tabla
            translations.insert("titulo", "Gestión de Empleados");
            translations.insert("nuevo", "Nuevo");
            translations.insert("eliminar", "Eliminar");
            translations.insert("editar", "Editar");
            translations.insert("buscar", "Buscar...");
            translations.insert("id", "ID");
            translations.insert("nombre", "Nombre");
            translations.insert("direccion", "Dirección");
            translations.insert("telefono", "Teléfono");
            translations.insert("acciones", "Acciones");
            translations.insert("sin_empleados", "No se encontraron empleados.");
            translations.insert("cargando", "Cargando empleados...");
            translations.insert("total", "En total hay {n} empleados.");
            translations.insert("seleccionar_todos", "Seleccionar todos");

            // Diálogo
            translations.insert("detalle_empleado", "Detalles del Empleado");
            translations.insert("nombre_obligatorio", "El nombre es obligatorio.");
            translations.insert("cancelar", "Cancelar");
            translations.insert("guardar", "Guardar");

            // Confirmación
            translations.insert("confirmar", "Confirmar");
            translations.insert("si", "Sí");
            translations.insert("no", "No");
            translations.insert("confirmar_eliminar", "¿Estás seguro de que deseas eliminar a {nombre}?");
            translations.insert("confirmar_eliminar_seleccionados", "¿Estás seguro de que deseas eliminar los empleados seleccionados?");

            // Toasts
            translations.insert("exito", "Éxito");
            translations.insert("error", "Error");
            translations.insert("empleado_eliminado", "Empleado Eliminado");
            translations.insert("empleados_eliminados", "Empleados Eliminados");
            translations.insert("empleados_eliminados_n", "{n} empleados eliminados");
            translations.insert("empleado_actualizado", "Empleado Actualizado");
            translations.insert("empleado_creado", "Empleado Creado");
            translations.insert("aviso", "Aviso");
            translations.insert("filas_sin_id", "{n} filas no tienen id y no se pueden eliminar");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave tal cual si no hay traducción.
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Traducción con un único placeholder `{nombre}` / `{n}`
pub fn t_with(key: &str, lang: &str, placeholder: &str, value: &str) -> String {
    t(key, lang).replace(&format!("{{{}}}", placeholder), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traduce_por_idioma() {
        assert_eq!(t("nuevo", "ES"), "Nuevo");
        assert_eq!(t("nuevo", "en"), "New");
        // Idioma desconocido cae a español
        assert_eq!(t("guardar", "FR"), "Guardar");
    }

    #[test]
    fn clave_desconocida_devuelve_la_clave() {
        assert_eq!(t("no_existe", "ES"), "no_existe");
    }

    #[test]
    fn reemplaza_placeholder() {
        assert_eq!(
            t_with("confirmar_eliminar", "ES", "nombre", "Ana"),
            "¿Estás seguro de que deseas eliminar a Ana?"
        );
        assert_eq!(t_with("total", "EN", "n", "3"), "In total there are 3 employees.");
    }
}
