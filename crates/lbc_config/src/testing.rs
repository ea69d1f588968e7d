use lbc_toleration::AdditionalTolerationKeys;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes tests that read or modify process environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records every key set it is handed.
#[derive(Debug, Default)]
pub(crate) struct RecordingRegistry {
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRegistry {
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Option<Vec<String>> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl AdditionalTolerationKeys for RecordingRegistry {
    fn add_additional_toleration_keys(&self, keys: &[String]) {
        self.calls.lock().unwrap().push(keys.to_vec());
    }
}
