// ============================================================================
// EMPLEADO VIEWMODEL - LÓGICA DE LA PANTALLA DE EMPLEADOS
// ============================================================================
// Media entre la tabla y EmpleadoService. Muta AppState y notifica;
// las vistas solo llaman a estos métodos.
// ============================================================================

use futures::future::join_all;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

use crate::models::{Campo, ConfirmAction, Confirmacion, Empleado, EmpleadoId, Severity, Toast};
use crate::services::{ApiError, EmpleadoService};
use crate::state::{AppState, IncrementalUpdate, SaveAction, UpdateType};
use crate::utils::i18n::{t, t_with};

#[derive(Clone)]
pub struct EmpleadoViewModel {
    service: EmpleadoService,
    state: AppState,
}

impl EmpleadoViewModel {
    pub fn new(state: AppState) -> Self {
        Self::with_service(state, EmpleadoService::new())
    }

    pub fn with_service(state: AppState, service: EmpleadoService) -> Self {
        Self { service, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Cargar la lista completa
    pub async fn load_empleados(&self) {
        self.state.set_loading(true);
        self.state.notify_subscribers();

        let resultado = self.service.get_empleados().await;
        self.aplicar_carga(resultado);
    }

    fn aplicar_carga(&self, resultado: Result<Vec<Empleado>, ApiError>) {
        match resultado {
            Ok(empleados) => self.state.set_empleados(empleados),
            Err(e) => self.show_error(&e),
        }

        self.state.set_loading(false);
        self.state.notify_subscribers();
    }

    pub fn open_new(&self) {
        self.state.open_new();
        self.state.notify_subscribers();
    }

    pub fn edit_empleado(&self, empleado: &Empleado) {
        self.state.edit(empleado);
        self.state.notify_subscribers();
    }

    pub fn hide_dialog(&self) {
        self.state.hide_dialog();
        self.state.notify_subscribers();
    }

    /// Cambio en un input del diálogo; no re-renderiza para no perder el foco
    pub fn update_field(&self, campo: Campo, valor: String) {
        self.state.update_field(campo, valor);
        if campo == Campo::Nombre {
            self.notify(IncrementalUpdate::NombreHint);
        }
    }

    /// Pedir confirmación para eliminar una fila
    pub fn delete_empleado(&self, empleado: &Empleado) {
        let lang = self.state.lang();
        self.state.request_confirmation(Confirmacion {
            header: t("confirmar", &lang),
            message: t_with("confirmar_eliminar", &lang, "nombre", &empleado.nombre),
            action: ConfirmAction::EliminarUno(empleado.clone()),
        });
        self.state.notify_subscribers();
    }

    /// Pedir confirmación para eliminar la selección
    pub fn delete_selected_empleados(&self) {
        if !self.state.has_selection() {
            return;
        }
        let lang = self.state.lang();
        self.state.request_confirmation(Confirmacion {
            header: t("confirmar", &lang),
            message: t("confirmar_eliminar_seleccionados", &lang),
            action: ConfirmAction::EliminarSeleccionados,
        });
        self.state.notify_subscribers();
    }

    pub fn reject_confirmation(&self) {
        if self.state.take_confirmation().is_some() {
            self.state.notify_subscribers();
        }
    }

    /// Ejecutar la acción pendiente de confirmación
    pub async fn accept_confirmation(&self) {
        let Some(confirmacion) = self.state.take_confirmation() else {
            return;
        };
        // Cerrar el diálogo antes de lanzar los requests
        self.state.notify_subscribers();

        match confirmacion.action {
            ConfirmAction::EliminarUno(empleado) => self.eliminar_uno(empleado).await,
            ConfirmAction::EliminarSeleccionados => self.eliminar_seleccionados().await,
        }
        self.state.notify_subscribers();
    }

    async fn eliminar_uno(&self, empleado: Empleado) {
        let Some(id) = empleado.id.clone() else {
            log::warn!("⚠️ [EMPLEADOS] Fila sin id, nada que eliminar: {}", empleado.nombre);
            self.avisar_sin_id(1);
            return;
        };
        let resultado = self.service.delete_empleado(&id).await;
        self.aplicar_eliminado(&id, resultado);
    }

    fn aplicar_eliminado(&self, id: &EmpleadoId, resultado: Result<(), ApiError>) {
        match resultado {
            Ok(()) => {
                self.state.remove_empleado(id);
                let lang = self.state.lang();
                self.show_toast(Severity::Success, &t("exito", &lang), &t("empleado_eliminado", &lang));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// DELETE concurrentes para toda la selección, esperando a todos
    async fn eliminar_seleccionados(&self) {
        let (con_id, sin_id): (Vec<Empleado>, Vec<Empleado>) =
            self.state.selected().into_iter().partition(|e| e.id.is_some());

        let deletes = con_id.into_iter().filter_map(|e| e.id).map(|id| {
            let service = self.service.clone();
            async move {
                let result = service.delete_empleado(&id).await;
                (id, result)
            }
        });
        let resultados = join_all(deletes).await;
        self.aplicar_eliminaciones(resultados, sin_id.len());
    }

    /// Aplicar el resultado de cada DELETE; devuelve cuántas filas se eliminaron.
    /// Las filas sin id no cuentan en el total: nunca llegaron a pedirse.
    fn aplicar_eliminaciones(&self, resultados: Vec<(EmpleadoId, Result<(), ApiError>)>, sin_id: usize) -> usize {
        let total = resultados.len();
        let mut eliminados = 0;
        for (id, result) in resultados {
            match result {
                Ok(()) => {
                    self.state.remove_empleado(&id);
                    eliminados += 1;
                }
                Err(e) => self.show_error(&e),
            }
        }
        self.state.clear_selection();
        log::info!("🗑️ [EMPLEADOS] {}/{} empleados eliminados", eliminados, total);

        if sin_id > 0 {
            self.avisar_sin_id(sin_id);
        }

        if eliminados > 0 {
            let lang = self.state.lang();
            let detail = if eliminados == total {
                t("empleados_eliminados", &lang)
            } else {
                t_with("empleados_eliminados_n", &lang, "n", &eliminados.to_string())
            };
            self.show_toast(Severity::Success, &t("exito", &lang), &detail);
        }
        eliminados
    }

    fn avisar_sin_id(&self, n: usize) {
        let lang = self.state.lang();
        self.show_toast(
            Severity::Warn,
            &t("aviso", &lang),
            &t_with("filas_sin_id", &lang, "n", &n.to_string()),
        );
    }

    /// Guardar el borrador: alta si no tiene id, actualización si lo tiene
    pub async fn save_empleado(&self) {
        if *self.state.saving.borrow() {
            return;
        }

        match self.state.begin_save() {
            SaveAction::Invalid => {
                log::debug!("✋ [EMPLEADOS] Nombre vacío, no se guarda");
                self.notify(IncrementalUpdate::NombreHint);
            }
            SaveAction::Create(borrador) => {
                self.set_saving(true);
                let resultado = self.service.save_empleado(&borrador).await;
                self.aplicar_guardado(None, resultado);
                self.set_saving(false);
            }
            SaveAction::Update(id, borrador) => {
                self.set_saving(true);
                let resultado = self.service.update_empleado(&id, &borrador).await;
                self.aplicar_guardado(Some(&id), resultado);
                self.set_saving(false);
            }
        }
    }

    /// Con id: reemplazar la fila en su posición. Sin id: añadir al final.
    /// Si falla, el diálogo sigue abierto con el borrador.
    fn aplicar_guardado(&self, id: Option<&EmpleadoId>, resultado: Result<Empleado, ApiError>) {
        let lang = self.state.lang();
        match (id, resultado) {
            (_, Err(e)) => self.show_error(&e),
            (Some(id), Ok(actualizado)) => {
                if !self.state.replace_empleado(id, actualizado) {
                    log::warn!("⚠️ [EMPLEADOS] Empleado {} ya no está en la lista", id);
                }
                self.show_toast(Severity::Success, &t("exito", &lang), &t("empleado_actualizado", &lang));
                self.state.finish_save();
            }
            (None, Ok(creado)) => {
                self.state.push_empleado(creado);
                self.show_toast(Severity::Success, &t("exito", &lang), &t("empleado_creado", &lang));
                self.state.finish_save();
            }
        }
    }

    /// Filtro global de la tabla; solo se redibuja el cuerpo
    pub fn filter_global(&self, value: &str) {
        self.state.set_global_filter(value);
        self.notify(IncrementalUpdate::Tabla);
    }

    pub fn toggle_selected(&self, empleado: &Empleado) {
        self.state.toggle_selected(empleado);
        self.notify(IncrementalUpdate::Tabla);
        self.notify(IncrementalUpdate::Toolbar);
    }

    pub fn toggle_select_all(&self) {
        self.state.toggle_select_all_visible();
        self.notify(IncrementalUpdate::Tabla);
        self.notify(IncrementalUpdate::Toolbar);
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.state.remove_toast(id);
        self.notify(IncrementalUpdate::Toasts);
    }

    fn set_saving(&self, saving: bool) {
        *self.state.saving.borrow_mut() = saving;
        self.state.notify_subscribers();
    }

    fn notify(&self, update: IncrementalUpdate) {
        self.state.notify_subscribers_with_type(UpdateType::Incremental(update));
    }

    /// Toast de error con el mensaje ya traducido por el servicio
    fn show_error(&self, error: &ApiError) {
        let lang = self.state.lang();
        self.show_toast(Severity::Error, &t("error", &lang), &error.to_string());
    }

    fn show_toast(&self, severity: Severity, summary: &str, detail: &str) {
        let toast = self.state.push_toast(severity, summary, detail);
        self.notify(IncrementalUpdate::Toasts);
        self.programar_expiracion(&toast);
    }

    #[cfg(target_arch = "wasm32")]
    fn programar_expiracion(&self, toast: &Toast) {
        let state = self.state.clone();
        let id = toast.id;
        Timeout::new(toast.life_ms, move || {
            state.remove_toast(id);
            state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Toasts));
        })
        .forget();
    }

    /// Fuera del navegador no hay temporizadores: el toast queda hasta cerrarlo
    #[cfg(not(target_arch = "wasm32"))]
    fn programar_expiracion(&self, toast: &Toast) {
        log::debug!("⏱️ [TOAST] Sin temporizador para el toast {}", toast.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmpleadoId;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn empleado(id: i64, nombre: &str) -> Empleado {
        Empleado {
            id: Some(EmpleadoId::Numero(id)),
            nombre: nombre.to_string(),
            direccion: String::new(),
            telefono: String::new(),
        }
    }

    fn viewmodel() -> (EmpleadoViewModel, Rc<RefCell<Vec<UpdateType>>>) {
        let state = AppState::new();
        *state.language.borrow_mut() = "ES".to_string();
        let updates = Rc::new(RefCell::new(Vec::new()));
        {
            let updates = updates.clone();
            state.subscribe_to_changes(move |u| updates.borrow_mut().push(u));
        }
        (EmpleadoViewModel::new(state), updates)
    }

    #[test]
    fn guardar_sin_nombre_no_hace_request() {
        let (vm, updates) = viewmodel();
        vm.open_new();
        updates.borrow_mut().clear();

        block_on(vm.save_empleado());

        assert!(vm.state().is_dialog_open());
        assert!(*vm.state().submitted.borrow());
        assert!(!*vm.state().saving.borrow());
        assert!(vm.state().toasts.borrow().is_empty());
        assert_eq!(
            *updates.borrow(),
            vec![UpdateType::Incremental(IncrementalUpdate::NombreHint)]
        );
    }

    #[test]
    fn eliminar_pide_confirmacion_con_el_nombre() {
        let (vm, _) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana")]);
        vm.delete_empleado(&empleado(1, "Ana"));

        let confirmacion = vm.state().confirmacion.borrow().clone().unwrap();
        assert_eq!(confirmacion.header, "Confirmar");
        assert_eq!(confirmacion.message, "¿Estás seguro de que deseas eliminar a Ana?");
        assert_eq!(confirmacion.action, ConfirmAction::EliminarUno(empleado(1, "Ana")));

        vm.reject_confirmation();
        assert!(vm.state().confirmacion.borrow().is_none());
        assert_eq!(vm.state().empleados.borrow().len(), 1);
    }

    #[test]
    fn eliminar_seleccionados_sin_seleccion_no_pide_confirmacion() {
        let (vm, updates) = viewmodel();
        vm.delete_selected_empleados();
        assert!(vm.state().confirmacion.borrow().is_none());
        assert!(updates.borrow().is_empty());

        vm.state().set_empleados(vec![empleado(1, "Ana")]);
        vm.toggle_selected(&empleado(1, "Ana"));
        vm.delete_selected_empleados();
        let confirmacion = vm.state().confirmacion.borrow().clone().unwrap();
        assert_eq!(confirmacion.action, ConfirmAction::EliminarSeleccionados);
        assert_eq!(
            confirmacion.message,
            "¿Estás seguro de que deseas eliminar los empleados seleccionados?"
        );
    }

    #[test]
    fn aceptar_sin_confirmacion_pendiente_no_hace_nada() {
        let (vm, updates) = viewmodel();
        block_on(vm.accept_confirmation());
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn filtro_solo_actualiza_la_tabla() {
        let (vm, updates) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana"), empleado(2, "Luis")]);
        vm.filter_global("lu");

        assert_eq!(vm.state().visible_empleados(), vec![empleado(2, "Luis")]);
        assert_eq!(*updates.borrow(), vec![UpdateType::Incremental(IncrementalUpdate::Tabla)]);
    }

    fn toasts(vm: &EmpleadoViewModel) -> Vec<(Severity, String)> {
        vm.state()
            .toasts
            .borrow()
            .iter()
            .map(|t| (t.severity, t.detail.clone()))
            .collect()
    }

    fn nombres(vm: &EmpleadoViewModel) -> Vec<String> {
        vm.state().empleados.borrow().iter().map(|e| e.nombre.clone()).collect()
    }

    #[test]
    fn carga_reemplaza_la_lista_y_quita_loading() {
        let (vm, _) = viewmodel();
        vm.state().set_loading(true);
        vm.aplicar_carga(Ok(vec![empleado(1, "Ana"), empleado(2, "Luis")]));
        assert_eq!(nombres(&vm), vec!["Ana", "Luis"]);
        assert!(!*vm.state().loading.borrow());

        vm.state().set_loading(true);
        vm.aplicar_carga(Err(ApiError::network("http://localhost:8080/api/persona")));
        assert_eq!(nombres(&vm), vec!["Ana", "Luis"]);
        assert!(!*vm.state().loading.borrow());
        assert_eq!(
            toasts(&vm),
            vec![(
                Severity::Error,
                "Código de error: 0, mensaje: Http failure response for http://localhost:8080/api/persona: 0 Unknown Error"
                    .to_string()
            )]
        );
    }

    #[test]
    fn actualizar_reemplaza_en_su_posicion() {
        let (vm, _) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana"), empleado(2, "Luis"), empleado(3, "Eva")]);
        vm.edit_empleado(&empleado(2, "Luis"));

        vm.aplicar_guardado(Some(&EmpleadoId::Numero(2)), Ok(empleado(2, "Luis B.")));

        assert_eq!(nombres(&vm), vec!["Ana", "Luis B.", "Eva"]);
        assert!(!vm.state().is_dialog_open());
        assert!(vm.state().empleado.borrow().es_nuevo());
        assert_eq!(toasts(&vm), vec![(Severity::Success, "Empleado Actualizado".to_string())]);
    }

    #[test]
    fn alta_se_anade_al_final() {
        let (vm, _) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana")]);
        vm.open_new();

        vm.aplicar_guardado(None, Ok(empleado(7, "Nuevo")));

        assert_eq!(nombres(&vm), vec!["Ana", "Nuevo"]);
        assert!(!vm.state().is_dialog_open());
        assert_eq!(toasts(&vm), vec![(Severity::Success, "Empleado Creado".to_string())]);
    }

    #[test]
    fn guardado_fallido_mantiene_el_dialogo() {
        let (vm, _) = viewmodel();
        vm.open_new();
        vm.update_field(Campo::Nombre, "Ana".to_string());

        vm.aplicar_guardado(None, Err(ApiError::http("u", 500, "Internal Server Error")));

        assert!(vm.state().is_dialog_open());
        assert_eq!(vm.state().empleado.borrow().nombre, "Ana");
        assert!(vm.state().empleados.borrow().is_empty());
        assert_eq!(
            toasts(&vm),
            vec![(
                Severity::Error,
                "Código de error: 500, mensaje: Http failure response for u: 500 Internal Server Error".to_string()
            )]
        );
    }

    #[test]
    fn eliminar_uno_quita_la_fila() {
        let (vm, _) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana"), empleado(2, "Luis")]);
        vm.toggle_selected(&empleado(1, "Ana"));

        vm.aplicar_eliminado(&EmpleadoId::Numero(1), Ok(()));
        assert_eq!(nombres(&vm), vec!["Luis"]);
        assert!(!vm.state().has_selection());
        assert_eq!(toasts(&vm), vec![(Severity::Success, "Empleado Eliminado".to_string())]);

        vm.aplicar_eliminado(&EmpleadoId::Numero(2), Err(ApiError::http("u", 404, "Not Found")));
        assert_eq!(nombres(&vm), vec!["Luis"]);
        assert_eq!(toasts(&vm).last().map(|t| t.0), Some(Severity::Error));
    }

    #[test]
    fn eliminar_seleccionados_todos_correctos() {
        let (vm, _) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana"), empleado(2, "Luis"), empleado(3, "Eva")]);
        vm.toggle_selected(&empleado(1, "Ana"));
        vm.toggle_selected(&empleado(3, "Eva"));

        let eliminados = vm.aplicar_eliminaciones(
            vec![(EmpleadoId::Numero(1), Ok(())), (EmpleadoId::Numero(3), Ok(()))],
            0,
        );

        assert_eq!(eliminados, 2);
        assert_eq!(nombres(&vm), vec!["Luis"]);
        assert!(!vm.state().has_selection());
        assert_eq!(toasts(&vm), vec![(Severity::Success, "Empleados Eliminados".to_string())]);
    }

    #[test]
    fn eliminar_seleccionados_parcial() {
        let (vm, _) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana"), empleado(2, "Luis"), empleado(3, "Eva")]);
        vm.toggle_select_all();

        let eliminados = vm.aplicar_eliminaciones(
            vec![
                (EmpleadoId::Numero(1), Ok(())),
                (EmpleadoId::Numero(2), Err(ApiError::http("u/2", 500, "Internal Server Error"))),
                (EmpleadoId::Numero(3), Ok(())),
            ],
            0,
        );

        assert_eq!(eliminados, 2);
        assert_eq!(nombres(&vm), vec!["Luis"]);
        assert!(!vm.state().has_selection());
        let toasts = toasts(&vm);
        assert_eq!(toasts.iter().filter(|t| t.0 == Severity::Error).count(), 1);
        assert_eq!(toasts.last(), Some(&(Severity::Success, "2 empleados eliminados".to_string())));
    }

    #[test]
    fn eliminar_seleccionados_todos_fallan() {
        let (vm, _) = viewmodel();
        vm.state().set_empleados(vec![empleado(1, "Ana"), empleado(2, "Luis")]);
        vm.toggle_select_all();

        let eliminados = vm.aplicar_eliminaciones(
            vec![
                (EmpleadoId::Numero(1), Err(ApiError::network("u/1"))),
                (EmpleadoId::Numero(2), Err(ApiError::network("u/2"))),
            ],
            0,
        );

        assert_eq!(eliminados, 0);
        assert_eq!(nombres(&vm), vec!["Ana", "Luis"]);
        assert!(!vm.state().has_selection());
        let toasts = toasts(&vm);
        assert_eq!(toasts.len(), 2);
        assert!(toasts.iter().all(|t| t.0 == Severity::Error));
    }

    #[test]
    fn filas_sin_id_no_cuentan_como_fallo() {
        let (vm, _) = viewmodel();
        let sin_id = Empleado {
            nombre: "Sin id".to_string(),
            ..Empleado::nuevo()
        };
        vm.state().set_empleados(vec![empleado(1, "Ana"), sin_id.clone()]);
        vm.toggle_select_all();

        let eliminados = vm.aplicar_eliminaciones(vec![(EmpleadoId::Numero(1), Ok(()))], 1);

        assert_eq!(eliminados, 1);
        assert_eq!(nombres(&vm), vec!["Sin id"]);
        assert_eq!(
            toasts(&vm),
            vec![
                (Severity::Warn, "1 filas no tienen id y no se pueden eliminar".to_string()),
                (Severity::Success, "Empleados Eliminados".to_string()),
            ]
        );
    }

    #[test]
    fn eliminar_fila_sin_id_avisa() {
        let (vm, _) = viewmodel();
        let sin_id = Empleado {
            nombre: "Ana".to_string(),
            ..Empleado::nuevo()
        };
        vm.state().set_empleados(vec![sin_id.clone()]);
        vm.delete_empleado(&sin_id);

        block_on(vm.accept_confirmation());

        assert_eq!(nombres(&vm), vec!["Ana"]);
        assert_eq!(toasts(&vm).first().map(|t| t.0), Some(Severity::Warn));
    }

    #[test]
    fn editar_y_cancelar() {
        let (vm, updates) = viewmodel();
        vm.edit_empleado(&empleado(4, "Eva"));
        assert!(vm.state().is_dialog_open());
        assert_eq!(vm.state().empleado.borrow().nombre, "Eva");

        vm.update_field(Campo::Direccion, "Gran Vía".to_string());
        vm.hide_dialog();
        assert!(!vm.state().is_dialog_open());
        assert_eq!(
            *updates.borrow(),
            vec![UpdateType::FullRender, UpdateType::FullRender]
        );
    }
}
