// ============================================================================
// APP STATE - Estado global de la pantalla de empleados
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::{Campo, Confirmacion, Empleado, EmpleadoId, Severity, Toast};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (diálogos, carga de la lista, altas/bajas)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Cuerpo de la tabla + footer (filtro y selección)
    Tabla,
    /// Botón "Eliminar" de la toolbar
    Toolbar,
    /// Pila de toasts
    Toasts,
    /// Aviso "nombre obligatorio" del diálogo
    NombreHint,
}

/// Resultado de preparar un guardado
#[derive(Clone, Debug, PartialEq)]
pub enum SaveAction {
    /// Nombre vacío: no se hace ningún request
    Invalid,
    Create(Empleado),
    Update(EmpleadoId, Empleado),
}

type Subscriber = Rc<dyn Fn(UpdateType)>;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    // Datos
    pub empleados: Rc<RefCell<Vec<Empleado>>>,
    pub empleado: Rc<RefCell<Empleado>>,
    pub seleccionados: Rc<RefCell<Vec<Empleado>>>,

    // UI State
    pub empleado_dialog: Rc<RefCell<bool>>,
    pub submitted: Rc<RefCell<bool>>,
    pub saving: Rc<RefCell<bool>>,
    pub loading: Rc<RefCell<bool>>,
    pub global_filter: Rc<RefCell<String>>,
    pub confirmacion: Rc<RefCell<Option<Confirmacion>>>,
    pub toasts: Rc<RefCell<Vec<Toast>>>,
    pub language: Rc<RefCell<String>>,
    toast_life_ms: u32,
    next_toast_id: Rc<Cell<u32>>,

    // Reactivity: callbacks para notificar cambios
    change_subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            empleados: Rc::new(RefCell::new(Vec::new())),
            empleado: Rc::new(RefCell::new(Empleado::nuevo())),
            seleccionados: Rc::new(RefCell::new(Vec::new())),

            empleado_dialog: Rc::new(RefCell::new(false)),
            submitted: Rc::new(RefCell::new(false)),
            saving: Rc::new(RefCell::new(false)),
            loading: Rc::new(RefCell::new(false)),
            global_filter: Rc::new(RefCell::new(String::new())),
            confirmacion: Rc::new(RefCell::new(None)),
            toasts: Rc::new(RefCell::new(Vec::new())),
            language: Rc::new(RefCell::new(CONFIG.language.clone())),
            toast_life_ms: CONFIG.toast_life_ms,
            next_toast_id: Rc::new(Cell::new(1)),

            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    // ------------------------------------------------------------------------
    // Reactividad
    // ------------------------------------------------------------------------

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar re-render completo
    pub fn notify_subscribers(&self) {
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    /// Notificar con tipo específico; los subscribers deciden cómo actualizar
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Clonar antes de llamar: un callback puede suscribir otro
        let subscribers: Vec<Subscriber> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update_type);
        }
    }

    pub fn lang(&self) -> String {
        self.language.borrow().clone()
    }

    // ------------------------------------------------------------------------
    // Lista
    // ------------------------------------------------------------------------

    pub fn set_empleados(&self, empleados: Vec<Empleado>) {
        *self.empleados.borrow_mut() = empleados;
        // La selección solo puede contener filas que siguen existiendo
        let empleados = self.empleados.borrow();
        self.seleccionados
            .borrow_mut()
            .retain(|s| empleados.iter().any(|e| e.misma_fila(s)));
    }

    pub fn push_empleado(&self, empleado: Empleado) {
        self.empleados.borrow_mut().push(empleado);
    }

    /// Índice de la fila con ese id
    pub fn find_index_by_id(&self, id: &EmpleadoId) -> Option<usize> {
        self.empleados
            .borrow()
            .iter()
            .position(|e| e.id.as_ref() == Some(id))
    }

    /// Reemplazar la fila con ese id; false si ya no existe
    pub fn replace_empleado(&self, id: &EmpleadoId, data: Empleado) -> bool {
        match self.find_index_by_id(id) {
            Some(index) => {
                self.empleados.borrow_mut()[index] = data;
                true
            }
            None => false,
        }
    }

    /// Quitar la fila de la lista y de la selección
    pub fn remove_empleado(&self, id: &EmpleadoId) {
        self.empleados.borrow_mut().retain(|e| e.id.as_ref() != Some(id));
        self.seleccionados.borrow_mut().retain(|e| e.id.as_ref() != Some(id));
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    // ------------------------------------------------------------------------
    // Registro de trabajo y diálogo
    // ------------------------------------------------------------------------

    /// Abrir diálogo con un borrador vacío
    pub fn open_new(&self) {
        *self.empleado.borrow_mut() = Empleado::nuevo();
        *self.submitted.borrow_mut() = false;
        *self.empleado_dialog.borrow_mut() = true;
    }

    /// Abrir diálogo con una copia de la fila
    pub fn edit(&self, empleado: &Empleado) {
        *self.empleado.borrow_mut() = empleado.clone();
        *self.empleado_dialog.borrow_mut() = true;
    }

    pub fn hide_dialog(&self) {
        *self.empleado_dialog.borrow_mut() = false;
        *self.submitted.borrow_mut() = false;
    }

    pub fn is_dialog_open(&self) -> bool {
        *self.empleado_dialog.borrow()
    }

    pub fn update_field(&self, campo: Campo, valor: String) {
        self.empleado.borrow_mut().set_campo(campo, valor);
    }

    /// Marcar como enviado y decidir qué request hacer
    pub fn begin_save(&self) -> SaveAction {
        *self.submitted.borrow_mut() = true;
        let borrador = self.empleado.borrow().clone();

        if !borrador.tiene_nombre_valido() {
            return SaveAction::Invalid;
        }
        match borrador.id.clone() {
            Some(id) => SaveAction::Update(id, borrador),
            None => SaveAction::Create(borrador),
        }
    }

    /// Tras guardar con éxito: cerrar y descartar el borrador
    pub fn finish_save(&self) {
        *self.empleado_dialog.borrow_mut() = false;
        *self.empleado.borrow_mut() = Empleado::nuevo();
    }

    /// Mostrar "nombre obligatorio" en el diálogo
    pub fn show_nombre_required(&self) -> bool {
        *self.submitted.borrow() && !self.empleado.borrow().tiene_nombre_valido()
    }

    // ------------------------------------------------------------------------
    // Filtro y selección
    // ------------------------------------------------------------------------

    pub fn set_global_filter(&self, value: &str) {
        *self.global_filter.borrow_mut() = value.to_string();
    }

    /// Filas que pasan el filtro global
    pub fn visible_empleados(&self) -> Vec<Empleado> {
        let filtro = self.global_filter.borrow();
        self.empleados
            .borrow()
            .iter()
            .filter(|e| e.coincide_con(&filtro))
            .cloned()
            .collect()
    }

    pub fn is_selected(&self, empleado: &Empleado) -> bool {
        self.seleccionados.borrow().iter().any(|s| s.misma_fila(empleado))
    }

    pub fn toggle_selected(&self, empleado: &Empleado) {
        let mut seleccionados = self.seleccionados.borrow_mut();
        if let Some(pos) = seleccionados.iter().position(|s| s.misma_fila(empleado)) {
            seleccionados.remove(pos);
        } else {
            seleccionados.push(empleado.clone());
        }
    }

    /// Todas las filas visibles están seleccionadas (y hay alguna)
    pub fn all_visible_selected(&self) -> bool {
        let visibles = self.visible_empleados();
        !visibles.is_empty() && visibles.iter().all(|e| self.is_selected(e))
    }

    /// Checkbox de cabecera: selecciona las visibles o las deselecciona todas
    pub fn toggle_select_all_visible(&self) {
        if self.all_visible_selected() {
            self.clear_selection();
        } else {
            *self.seleccionados.borrow_mut() = self.visible_empleados();
        }
    }

    pub fn clear_selection(&self) {
        self.seleccionados.borrow_mut().clear();
    }

    pub fn selected(&self) -> Vec<Empleado> {
        self.seleccionados.borrow().clone()
    }

    pub fn has_selection(&self) -> bool {
        !self.seleccionados.borrow().is_empty()
    }

    // ------------------------------------------------------------------------
    // Confirmación
    // ------------------------------------------------------------------------

    pub fn request_confirmation(&self, confirmacion: Confirmacion) {
        *self.confirmacion.borrow_mut() = Some(confirmacion);
    }

    /// Sacar la confirmación pendiente (cierra el diálogo)
    pub fn take_confirmation(&self) -> Option<Confirmacion> {
        self.confirmacion.borrow_mut().take()
    }

    // ------------------------------------------------------------------------
    // Toasts
    // ------------------------------------------------------------------------

    pub fn push_toast(&self, severity: Severity, summary: &str, detail: &str) -> Toast {
        let id = self.next_toast_id.get();
        self.next_toast_id.set(id.wrapping_add(1));
        let toast = Toast {
            id,
            severity,
            summary: summary.to_string(),
            detail: detail.to_string(),
            life_ms: self.toast_life_ms,
        };
        self.toasts.borrow_mut().push(toast.clone());
        toast
    }

    pub fn remove_toast(&self, id: u32) {
        self.toasts.borrow_mut().retain(|t| t.id != id);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
