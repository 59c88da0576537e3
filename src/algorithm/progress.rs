// Progreso y cancelación de búsquedas.
//
// Los solvers avisan el porcentaje de trabajo terminado (nodos iniciales o
// subconjuntos candidatos) en saltos de 5%. El aviso es síncrono y no toca el
// estado de la búsqueda.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Paso entre avisos de progreso, en puntos porcentuales.
pub const PROGRESS_STEP: u8 = 5;

/// Canal por el que un solver emite el porcentaje completado.
pub trait ProgressReporter {
    fn report(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressReporter for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Reporter que descarta todos los avisos.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// Bandera compartida para interrumpir una búsqueda desde fuera. Los solvers
/// sólo la consultan entre iteraciones de primer nivel, así que el mejor
/// resultado guardado en ese momento sigue siendo válido.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    flag: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Convierte "unidades terminadas de un total" en avisos de 5%, 10%, ... 100%.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: u128,
    next_threshold: u8,
}

impl ProgressTracker {
    pub fn new(total: u128) -> Self {
        ProgressTracker { total, next_threshold: PROGRESS_STEP }
    }

    /// Devuelve los umbrales cruzados al llegar a `done` unidades.
    pub fn advance(&mut self, done: u128) -> Vec<u8> {
        let mut crossed = Vec::new();
        if self.total == 0 {
            return crossed;
        }
        while self.next_threshold <= 100
            && done.saturating_mul(100) >= (self.next_threshold as u128).saturating_mul(self.total)
        {
            crossed.push(self.next_threshold);
            self.next_threshold += PROGRESS_STEP;
        }
        crossed
    }

    /// Cierra el seguimiento: si el 100% no se avisó todavía, lo devuelve.
    pub fn finish(&mut self) -> Option<u8> {
        if self.next_threshold <= 100 {
            self.next_threshold = 100 + PROGRESS_STEP;
            Some(100)
        } else {
            None
        }
    }
}
