//! Operation trait shared by every WeMo SOAP action
//!
//! An operation is a stateless description of one SOAP action: which
//! service it belongs to, how to turn a typed request into the payload
//! placed inside the action element, and how to read the typed response
//! back out of the `<ActionResponse>` element.

use serde::Serialize;
use xmltree::Element;

use crate::error::ApiError;
use crate::service::Service;

/// Base trait for all WeMo API operations
pub trait WemoOperation {
    /// The request type for this operation
    type Request: Serialize;

    /// The response type for this operation
    type Response;

    /// The UPnP service this operation belongs to
    const SERVICE: Service;

    /// The SOAP action name for this operation
    const ACTION: &'static str;

    /// Build the SOAP payload from the request data
    ///
    /// Returns the XML that goes inside the action element (without the SOAP
    /// envelope), or [`ApiError::InvalidParameter`] when the request cannot be
    /// sent as-is.
    fn build_payload(request: &Self::Request) -> Result<String, ApiError>;

    /// Parse the `<ActionResponse>` element into the typed response
    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError>;
}
