pub mod empleado;
pub mod toast;
pub mod confirmacion;

pub use empleado::{Campo, Empleado, EmpleadoId};
pub use toast::{Severity, Toast};
pub use confirmacion::{ConfirmAction, Confirmacion};
