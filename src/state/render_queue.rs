// ============================================================================
// RENDER QUEUE - Agrupa los updates de un mismo tick
// ============================================================================
// Un FullRender pendiente absorbe cualquier incremental; los incrementales
// repetidos se aplican una sola vez.
// ============================================================================

use std::cell::{Cell, RefCell};

use super::{IncrementalUpdate, UpdateType};

#[derive(Default)]
pub struct RenderQueue {
    full: Cell<bool>,
    incrementales: RefCell<Vec<IncrementalUpdate>>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encolar un update; true si la cola estaba vacía y hay que programar el flush
    pub fn push(&self, update: UpdateType) -> bool {
        let estaba_vacia = self.is_empty();
        match update {
            UpdateType::FullRender => {
                self.full.set(true);
                self.incrementales.borrow_mut().clear();
            }
            UpdateType::Incremental(_) if self.full.get() => {}
            UpdateType::Incremental(inc) => {
                let mut incrementales = self.incrementales.borrow_mut();
                if !incrementales.contains(&inc) {
                    incrementales.push(inc);
                }
            }
        }
        estaba_vacia
    }

    /// Vaciar la cola y devolver los updates a aplicar
    pub fn take(&self) -> Vec<UpdateType> {
        let incrementales = std::mem::take(&mut *self.incrementales.borrow_mut());
        if self.full.replace(false) {
            vec![UpdateType::FullRender]
        } else {
            incrementales.into_iter().map(UpdateType::Incremental).collect()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.full.get() && self.incrementales.borrow().is_empty()
    }
}
