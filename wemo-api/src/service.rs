/// Port WeMo devices most commonly expose their UPnP endpoints on.
///
/// Devices move between 49152 and 49155 across reboots; callers that know the
/// actual port from discovery should pass it explicitly.
pub const DEFAULT_PORT: u16 = 49153;

/// Represents the UPnP services used to control WeMo appliances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// deviceevent service - attribute get/set for appliance-class devices
    /// (Humidifier, Heater, Coffee Maker, Crock-Pot)
    DeviceEvent,
}

/// Contains the endpoint and service URI information for a UPnP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// The HTTP control endpoint path (relative to the device base URL)
    pub endpoint: &'static str,

    /// The UPnP service type used in SOAP requests
    pub service_uri: &'static str,

    /// The HTTP event endpoint path for UPnP event subscriptions
    pub event_endpoint: &'static str,
}

impl Service {
    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            Service::DeviceEvent => "deviceevent",
        }
    }

    /// Get the service information (endpoint and URI) for this service
    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::DeviceEvent => ServiceInfo {
                endpoint: "upnp/control/deviceevent1",
                service_uri: "urn:Belkin:service:deviceevent:1",
                event_endpoint: "upnp/event/deviceevent1",
            },
        }
    }
}
