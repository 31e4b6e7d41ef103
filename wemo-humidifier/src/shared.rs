//! Thread-safe handle around a [`Humidifier`]
//!
//! The facade itself is single-threaded. Hosts that deliver push
//! notifications on one thread and issue refreshes or setters on another
//! share it through this handle; every call holds the lock for its whole
//! request/response cycle.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use wemo_api::DeviceEvents;

use crate::error::Result;
use crate::humidifier::Humidifier;
use crate::snapshot::AttributeSnapshot;
use crate::switch::{BinaryStatePush, PushHandler};

pub struct SharedHumidifier<D, P = BinaryStatePush> {
    inner: Arc<Mutex<Humidifier<D, P>>>,
}

impl<D, P> Clone for SharedHumidifier<D, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: DeviceEvents, P: PushHandler> SharedHumidifier<D, P> {
    pub fn new(humidifier: Humidifier<D, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(humidifier)),
        }
    }

    /// Exclusive access for several calls in a row
    pub fn lock(&self) -> MutexGuard<'_, Humidifier<D, P>> {
        self.inner.lock()
    }

    pub fn refresh(&self) -> Result<()> {
        self.inner.lock().refresh()
    }

    pub fn on_push(&self, kind: &str, payload: &str) -> Result<bool> {
        self.inner.lock().on_push(kind, payload)
    }

    pub fn get_state(&self, force_refresh: bool) -> Result<u8> {
        self.inner.lock().get_state(force_refresh)
    }

    /// Copy of the cached attributes
    pub fn snapshot(&self) -> AttributeSnapshot {
        self.inner.lock().snapshot().clone()
    }
}
