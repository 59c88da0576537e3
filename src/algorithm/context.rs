use crate::algorithm::progress::{AbortHandle, NoProgress, ProgressReporter, ProgressTracker};
use crate::algorithm::report::{DiscardSink, ResultSink};
use crate::models::SizeWindow;

/// Todo lo que una ejecución recibe desde fuera: reporter de progreso, bandera
/// de interrupción, ventana de tamaños (fuerza bruta del problema B) y destino
/// del resumen. Cada ejecución crea el suyo; no hay estado global.
pub struct SearchContext<'a> {
    reporter: Box<dyn ProgressReporter + 'a>,
    sink: Box<dyn ResultSink + 'a>,
    abort: Option<AbortHandle>,
    window: Option<SizeWindow>,
    tracker: ProgressTracker,
}

impl<'a> SearchContext<'a> {
    pub fn new() -> Self {
        SearchContext {
            reporter: Box::new(NoProgress),
            sink: Box::new(DiscardSink),
            abort: None,
            window: None,
            tracker: ProgressTracker::new(0),
        }
    }

    pub fn with_reporter<R: ProgressReporter + 'a>(mut self, reporter: R) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn with_sink<S: ResultSink + 'a>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn with_abort(mut self, abort: AbortHandle) -> Self {
        self.abort = Some(abort);
        self
    }

    pub fn with_window(mut self, window: SizeWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn window(&self) -> Option<SizeWindow> {
        self.window
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.as_ref().is_some_and(|a| a.is_aborted())
    }

    pub(crate) fn begin(&mut self, total_units: u128) {
        self.tracker = ProgressTracker::new(total_units);
    }

    pub(crate) fn advance(&mut self, done_units: u128) {
        for pct in self.tracker.advance(done_units) {
            self.reporter.report(pct);
        }
    }

    pub(crate) fn finish(&mut self) {
        if let Some(pct) = self.tracker.finish() {
            self.reporter.report(pct);
        }
    }

    pub(crate) fn sink(&mut self) -> &mut (dyn ResultSink + 'a) {
        self.sink.as_mut()
    }
}

impl Default for SearchContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
