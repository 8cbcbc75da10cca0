pub mod empleado_viewmodel;

pub use empleado_viewmodel::EmpleadoViewModel;
