//! In-memory stand-in for the deviceevent service.
#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use wemo_api::{ApiError, DeviceEvents};

/// Records every call and answers `GetAttributes` with a canned list.
#[derive(Default)]
pub struct MockDevice {
    attribute_list: Mutex<String>,
    get_calls: AtomicUsize,
    set_calls: Mutex<Vec<String>>,
    fail_next_get: AtomicBool,
}

impl MockDevice {
    pub fn with_attributes(attributes: &[(&str, &str)]) -> Self {
        let device = Self::default();
        device.report(attributes);
        device
    }

    /// Change what the next `GetAttributes` returns
    pub fn report(&self, attributes: &[(&str, &str)]) {
        *self.attribute_list.lock() = fragment(attributes);
    }

    /// Report an attribute list verbatim, well-formed or not
    pub fn report_raw(&self, attribute_list: &str) {
        *self.attribute_list.lock() = attribute_list.to_string();
    }

    pub fn fail_next_get(&self) {
        self.fail_next_get.store(true, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> Vec<String> {
        self.set_calls.lock().clone()
    }
}

impl DeviceEvents for MockDevice {
    fn get_attributes(&self) -> wemo_api::Result<String> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_get.swap(false, Ordering::SeqCst) {
            return Err(ApiError::NetworkError("device unreachable".to_string()));
        }
        Ok(self.attribute_list.lock().clone())
    }

    fn set_attributes(&self, attribute_list: &str) -> wemo_api::Result<()> {
        self.set_calls.lock().push(attribute_list.to_string());
        Ok(())
    }
}

/// Build an attribute fragment the way the device reports it
pub fn fragment(attributes: &[(&str, &str)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| {
            format!("<attribute><name>{name}</name><value>{value}</value></attribute>")
        })
        .collect()
}
