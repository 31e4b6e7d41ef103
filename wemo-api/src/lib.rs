//! High-level WeMo API for device control
//!
//! This crate provides a type-safe, trait-based API for talking to WeMo
//! devices. It uses the private `soap-client` crate for low-level SOAP
//! communication and `wemo-parser` for attribute list markup.
//!
//! ```rust,no_run
//! use wemo_api::{DeviceEventClient, DeviceEvents, WemoClient};
//!
//! let device = DeviceEventClient::new(WemoClient::new(), "192.168.1.60", 49153);
//! let attribute_list = device.get_attributes()?;
//! device.set_attributes("<attribute><name>FanMode</name><value>2</value></attribute>")?;
//! # Ok::<(), wemo_api::ApiError>(())
//! ```

pub mod client;
pub mod device_event;
pub mod error;
pub mod operation;
pub mod operations;
pub mod service;

pub use client::WemoClient;
pub use device_event::{DeviceEventClient, DeviceEvents};
pub use error::{ApiError, Result};
pub use operation::WemoOperation;
pub use service::{Service, ServiceInfo, DEFAULT_PORT};
