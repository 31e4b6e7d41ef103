//! Switch capability shared by WeMo devices
//!
//! Every WeMo device answers to the same on/off interface. Appliance devices
//! such as the humidifier override parts of it and hand everything else to
//! the generic switch behaviour, modelled here as a [`PushHandler`].

use tracing::{debug, warn};

use crate::error::Result;

/// Push kind carrying the generic on/off state
pub const BINARY_STATE: &str = "BinaryState";

/// On/off capability of a WeMo device
pub trait Switch {
    /// 0 if off, 1 if on. Refreshes first when `force_refresh` is set or no
    /// state is known yet.
    fn get_state(&mut self, force_refresh: bool) -> Result<u8>;

    /// Change the device state
    fn set_state(&mut self, state: i32) -> Result<()>;

    /// Apply a push notification. Returns whether the kind was handled.
    fn on_push(&mut self, kind: &str, payload: &str) -> Result<bool>;
}

/// Handler for push notifications a device does not interpret itself
pub trait PushHandler {
    /// Returns whether the notification was handled
    fn on_push(&mut self, kind: &str, payload: &str) -> bool;
}

/// Generic switch push behaviour: remembers the last pushed `BinaryState`.
#[derive(Debug, Clone, Default)]
pub struct BinaryStatePush {
    state: Option<u8>,
}

impl BinaryStatePush {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last binary state received, if any
    pub fn state(&self) -> Option<u8> {
        self.state
    }
}

impl PushHandler for BinaryStatePush {
    fn on_push(&mut self, kind: &str, payload: &str) -> bool {
        if kind != BINARY_STATE {
            debug!(kind, "ignoring unsupported push notification");
            return false;
        }

        // Newer firmware appends extra fields: "1|1612345678|0|..."
        let state = payload.split('|').next().unwrap_or_default().trim();
        match state.parse::<u8>() {
            Ok(state) => {
                self.state = Some(state);
                true
            }
            Err(_) => {
                warn!(payload, "unexpected BinaryState payload");
                false
            }
        }
    }
}
