pub mod app;
pub mod toolbar;
pub mod table;
pub mod dialog;
pub mod confirm;
pub mod toast;

pub use app::render_app;
pub use toolbar::render_toolbar;
pub use table::{fill_table_body, render_empleado_table};
pub use dialog::{render_empleado_dialog, NOMBRE_INPUT_ID};
pub use confirm::render_confirm_dialog;
pub use toast::{fill_toasts, render_toasts};
