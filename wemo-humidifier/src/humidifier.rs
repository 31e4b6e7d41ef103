//! WeMo Humidifier device facade

use std::fmt;

use soap_client::SoapClient;
use tracing::{debug, info, warn};
use wemo_api::{DeviceEventClient, DeviceEvents, WemoClient};
use wemo_parser::AttributeList;

use crate::config::HumidifierConfig;
use crate::decoder::{self, names};
use crate::error::{HumidifierError, Result};
use crate::model::{DesiredHumidity, FanMode, WaterLevel};
use crate::snapshot::AttributeSnapshot;
use crate::switch::{BinaryStatePush, PushHandler, Switch};

/// Push kind carrying an attribute list
pub const ATTRIBUTE_LIST_PUSH: &str = "attributeList";

/// A WeMo Humidifier.
///
/// Holds the last-known attributes and talks to the device through a
/// [`DeviceEvents`] implementation. Read accessors only look at the cache;
/// [`refresh`](Self::refresh), [`on_push`](Self::on_push) and the setters
/// update it.
pub struct Humidifier<D, P = BinaryStatePush> {
    name: String,
    device_events: D,
    base: P,
    attributes: AttributeSnapshot,
    state: Option<i32>,
}

impl Humidifier<DeviceEventClient> {
    /// Connect to a humidifier over SOAP and fetch its attributes.
    pub fn connect(config: &HumidifierConfig) -> Result<Self> {
        let soap_client = SoapClient::with_timeouts(config.connect_timeout, config.read_timeout);
        let device_events = DeviceEventClient::new(
            WemoClient::with_soap_client(soap_client),
            config.host.clone(),
            config.port,
        );

        let mut humidifier = Humidifier::new(config.name.clone(), device_events);
        humidifier.refresh()?;
        Ok(humidifier)
    }
}

impl<D: DeviceEvents> Humidifier<D> {
    /// Create a humidifier with an empty cache. Nothing is fetched until the
    /// first refresh, push or `get_state` call.
    pub fn new(name: impl Into<String>, device_events: D) -> Self {
        Self::with_base(name, device_events, BinaryStatePush::new())
    }
}

impl<D: DeviceEvents, P: PushHandler> Humidifier<D, P> {
    /// Create a humidifier that hands unrecognized pushes to `base`
    pub fn with_base(name: impl Into<String>, device_events: D, base: P) -> Self {
        Self {
            name: name.into(),
            device_events,
            base,
            attributes: AttributeSnapshot::new(),
            state: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device_events(&self) -> &D {
        &self.device_events
    }

    /// Base switch push handler
    pub fn base(&self) -> &P {
        &self.base
    }

    /// Cached attributes
    pub fn snapshot(&self) -> &AttributeSnapshot {
        &self.attributes
    }

    /// Fetch all attributes from the device and merge them into the cache.
    ///
    /// On failure the cache is left untouched.
    pub fn refresh(&mut self) -> Result<()> {
        let result = self
            .device_events
            .get_attributes()
            .map_err(HumidifierError::from)
            .and_then(|raw| self.apply_attributes(&raw));

        if let Err(e) = &result {
            warn!(device = %self.name, error = %e, "attribute refresh failed");
        }
        result
    }

    /// Handle a push notification from the subscription layer.
    ///
    /// `attributeList` pushes are decoded and merged like a refresh; any
    /// other kind goes to the base switch handler.
    pub fn on_push(&mut self, kind: &str, payload: &str) -> Result<bool> {
        if kind == ATTRIBUTE_LIST_PUSH {
            self.apply_attributes(payload)?;
            return Ok(true);
        }

        Ok(self.base.on_push(kind, payload))
    }

    /// Returns 0 if off and 1 if on.
    ///
    /// The generic `GetBinaryState` call always reports 0 for this device,
    /// so the state comes from the fan mode instead.
    pub fn get_state(&mut self, force_refresh: bool) -> Result<u8> {
        if force_refresh || self.state.is_none() {
            self.refresh()?;
        }

        Ok(u8::from(self.state != Some(FanMode::Off.into())))
    }

    /// Same as [`set_fan_mode`](Self::set_fan_mode)
    pub fn set_state(&mut self, state: impl Into<i32>) -> Result<()> {
        self.set_fan_mode(state)
    }

    /// Set the fan mode (raw [`FanMode`] value), then refresh.
    pub fn set_fan_mode(&mut self, fan_mode: impl Into<i32>) -> Result<()> {
        let fan_mode = fan_mode.into();
        info!(device = %self.name, fan_mode, "setting fan mode");
        self.send(AttributeList::new().with(names::FAN_MODE, fan_mode))
    }

    /// Set the desired humidity (raw [`DesiredHumidity`] value), then refresh.
    pub fn set_humidity(&mut self, desired_humidity: impl Into<i32>) -> Result<()> {
        let desired_humidity = desired_humidity.into();
        info!(device = %self.name, desired_humidity, "setting desired humidity");
        self.send(AttributeList::new().with(names::DESIRED_HUMIDITY, desired_humidity))
    }

    /// Set fan mode and desired humidity in a single call, then refresh.
    pub fn set_fan_mode_and_humidity(
        &mut self,
        fan_mode: impl Into<i32>,
        desired_humidity: impl Into<i32>,
    ) -> Result<()> {
        let fan_mode = fan_mode.into();
        let desired_humidity = desired_humidity.into();
        info!(device = %self.name, fan_mode, desired_humidity, "setting fan mode and humidity");
        self.send(
            AttributeList::new()
                .with(names::FAN_MODE, fan_mode)
                .with(names::DESIRED_HUMIDITY, desired_humidity),
        )
    }

    pub fn fan_mode(&self) -> Option<i32> {
        self.attributes.fan_mode
    }

    /// Off, Minimum, Low, Medium, High, Maximum or Unknown
    pub fn fan_mode_label(&self) -> &'static str {
        FanMode::label_for(self.fan_mode())
    }

    pub fn desired_humidity(&self) -> Option<i32> {
        self.attributes.desired_humidity
    }

    /// Target humidity in percent ("45" .. "100") or Unknown
    pub fn desired_humidity_percent(&self) -> &'static str {
        DesiredHumidity::label_for(self.desired_humidity())
    }

    pub fn current_humidity_percent(&self) -> Option<f64> {
        self.attributes.current_humidity
    }

    /// 0 if Empty, 1 if Low, 2 if Good
    pub fn water_level(&self) -> Option<i32> {
        self.attributes.water_level
    }

    pub fn water_level_label(&self) -> &'static str {
        WaterLevel::label_for(self.water_level())
    }

    pub fn filter_life_percent(&self) -> Option<f64> {
        self.attributes.filter_life
    }

    /// Whether the filter needs to be changed
    pub fn filter_expired(&self) -> Option<bool> {
        self.attributes.filter_expired
    }

    fn apply_attributes(&mut self, raw: &str) -> Result<()> {
        let delta = decoder::decode(raw)?;
        debug!(device = %self.name, ?delta, "merging attributes");
        self.attributes.merge(&delta);
        self.state = self.attributes.fan_mode;
        Ok(())
    }

    fn send(&mut self, attributes: AttributeList) -> Result<()> {
        self.device_events.set_attributes(&attributes.to_fragment())?;
        self.get_state(true)?;
        Ok(())
    }
}

impl<D: DeviceEvents, P: PushHandler> Switch for Humidifier<D, P> {
    fn get_state(&mut self, force_refresh: bool) -> Result<u8> {
        Humidifier::get_state(self, force_refresh)
    }

    fn set_state(&mut self, state: i32) -> Result<()> {
        Humidifier::set_state(self, state)
    }

    fn on_push(&mut self, kind: &str, payload: &str) -> Result<bool> {
        Humidifier::on_push(self, kind, payload)
    }
}

impl<D, P> fmt::Display for Humidifier<D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<WeMo Humidifier \"{}\">", self.name)
    }
}

impl<D, P> fmt::Debug for Humidifier<D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Humidifier")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
