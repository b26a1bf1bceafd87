use crate::domain::{Engine, Grid};
use std::sync::{Arc, Mutex, PoisonError};

/// Engine handle for hosts that drive ticks and input from different threads.
/// Each `with` call holds the lock for the whole operation, so readers never
/// see a half-built generation.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    /// A poisoned lock is recovered: no engine operation leaves partial state.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let mut engine = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut engine)
    }

    /// Copy of the current generation
    pub fn snapshot(&self) -> Grid {
        self.with(|engine| engine.grid().clone())
    }
}
