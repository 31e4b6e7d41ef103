//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur while talking to a device control endpoint
#[derive(Debug, Error)]
pub enum SoapError {
    /// Connection, timeout or body transfer failure
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The response was not a well-formed SOAP envelope
    #[error("XML parsing error: {0}")]
    Parse(String),

    /// The device answered with a SOAP fault carrying this UPnP error code
    #[error("SOAP fault: UPnP error code {0}")]
    Fault(u16),
}
