//! The deviceevent RPC surface consumed by appliance devices
//!
//! Device models depend on the [`DeviceEvents`] trait rather than on the
//! SOAP client directly, so they can be driven by any transport.

use crate::operations::{
    GetAttributesOperation, GetAttributesRequest, SetAttributesOperation, SetAttributesRequest,
};
use crate::{Result, WemoClient};

/// Attribute get/set calls of the WeMo `deviceevent` service
pub trait DeviceEvents {
    /// Fetch the raw attribute list fragment
    fn get_attributes(&self) -> Result<String>;

    /// Send an unescaped attribute fragment to the device
    fn set_attributes(&self, attribute_list: &str) -> Result<()>;
}

/// [`DeviceEvents`] over SOAP for one device
#[derive(Debug, Clone)]
pub struct DeviceEventClient {
    client: WemoClient,
    host: String,
    port: u16,
}

impl DeviceEventClient {
    pub fn new(client: WemoClient, host: impl Into<String>, port: u16) -> Self {
        Self {
            client,
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl DeviceEvents for DeviceEventClient {
    fn get_attributes(&self) -> Result<String> {
        let response = self.client.execute::<GetAttributesOperation>(
            &self.host,
            self.port,
            &GetAttributesRequest,
        )?;
        Ok(response.attribute_list)
    }

    fn set_attributes(&self, attribute_list: &str) -> Result<()> {
        let request = SetAttributesRequest {
            attribute_list: attribute_list.to_string(),
        };
        self.client
            .execute::<SetAttributesOperation>(&self.host, self.port, &request)
    }
}

impl<T: DeviceEvents + ?Sized> DeviceEvents for Box<T> {
    fn get_attributes(&self) -> Result<String> {
        (**self).get_attributes()
    }

    fn set_attributes(&self, attribute_list: &str) -> Result<()> {
        (**self).set_attributes(attribute_list)
    }
}
