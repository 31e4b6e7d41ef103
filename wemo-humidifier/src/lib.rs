//! # wemo-humidifier
//!
//! Typed model of the Belkin WeMo Humidifier.
//!
//! The device reports its state as an attribute list over the `deviceevent`
//! UPnP service. This crate decodes that list into typed fields and offers
//! setters that encode user intent back into the same format:
//!
//! ```rust,no_run
//! use wemo_humidifier::{FanMode, Humidifier, HumidifierConfig};
//!
//! let config = HumidifierConfig::new("192.168.1.60").with_name("Bedroom");
//! let mut humidifier = Humidifier::connect(&config)?;
//!
//! println!("{} fan: {}", humidifier, humidifier.fan_mode_label());
//! println!("water: {}", humidifier.water_level_label());
//!
//! humidifier.set_fan_mode(FanMode::High)?;
//! # Ok::<(), wemo_humidifier::HumidifierError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Humidifier (cached AttributeSnapshot, typed accessors, setters)
//!     ↓
//! decoder (attribute list → AttributeSnapshot delta)
//!     ↓
//! wemo-parser (attribute list markup)   wemo-api (GetAttributes / SetAttributes)
//! ```
//!
//! Push notifications from a host subscription layer are fed through
//! [`Humidifier::on_push`]; kinds other than `attributeList` are handed to the
//! base switch behaviour ([`PushHandler`]).

pub mod config;
pub mod decoder;
pub mod error;
pub mod humidifier;
pub mod logging;
pub mod model;
pub mod shared;
pub mod snapshot;
pub mod switch;

pub use config::HumidifierConfig;
pub use decoder::decode;
pub use error::{HumidifierError, Result};
pub use humidifier::Humidifier;
pub use model::{DesiredHumidity, FanMode, WaterLevel, UNKNOWN_LABEL};
pub use shared::SharedHumidifier;
pub use snapshot::AttributeSnapshot;
pub use switch::{BinaryStatePush, PushHandler, Switch};

pub use wemo_api::{DeviceEventClient, DeviceEvents};
