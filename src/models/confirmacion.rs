use crate::models::empleado::Empleado;

/// Acción que se ejecuta si el usuario acepta
#[derive(Clone, PartialEq, Debug)]
pub enum ConfirmAction {
    EliminarUno(Empleado),
    EliminarSeleccionados,
}

/// Diálogo de confirmación pendiente
#[derive(Clone, PartialEq, Debug)]
pub struct Confirmacion {
    pub header: String,
    pub message: String,
    pub action: ConfirmAction,
}
