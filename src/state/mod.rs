// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod render_queue;

pub use app_state::*;
pub use render_queue::RenderQueue;
