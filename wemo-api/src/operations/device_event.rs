//! deviceevent service operations
//!
//! # Operations
//! - `GetAttributes` - read the device's full attribute list
//! - `SetAttributes` - write one or more attributes in a single call

use serde::Serialize;
use xmltree::Element;
use wemo_parser::xml_decode::escape_text;

use crate::{ApiError, Service, WemoOperation};

/// Name of the argument carrying the attribute list in both directions
const ATTRIBUTE_LIST: &str = "attributeList";

// =============================================================================
// GET ATTRIBUTES
// =============================================================================

/// GetAttributes operation
pub struct GetAttributesOperation;

/// Request for GetAttributes operation
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct GetAttributesRequest;

/// Response for GetAttributes operation
#[derive(Clone, Debug, PartialEq)]
pub struct GetAttributesResponse {
    /// Attribute list text with one level of XML escaping already removed
    pub attribute_list: String,
}

impl WemoOperation for GetAttributesOperation {
    type Request = GetAttributesRequest;
    type Response = GetAttributesResponse;

    const SERVICE: Service = Service::DeviceEvent;
    const ACTION: &'static str = "GetAttributes";

    fn build_payload(_request: &Self::Request) -> Result<String, ApiError> {
        Ok(String::new())
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        let element = xml.get_child(ATTRIBUTE_LIST).ok_or_else(|| {
            ApiError::ParseError(format!("Missing {} element", ATTRIBUTE_LIST))
        })?;

        Ok(GetAttributesResponse {
            attribute_list: element
                .get_text()
                .map(|text| text.into_owned())
                .unwrap_or_default(),
        })
    }
}

// =============================================================================
// SET ATTRIBUTES
// =============================================================================

/// SetAttributes operation
pub struct SetAttributesOperation;

/// Request for SetAttributes operation
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetAttributesRequest {
    /// Unescaped attribute fragment, e.g.
    /// `<attribute><name>FanMode</name><value>2</value></attribute>`
    pub attribute_list: String,
}

impl WemoOperation for SetAttributesOperation {
    type Request = SetAttributesRequest;
    type Response = ();

    const SERVICE: Service = Service::DeviceEvent;
    const ACTION: &'static str = "SetAttributes";

    fn build_payload(request: &Self::Request) -> Result<String, ApiError> {
        if request.attribute_list.trim().is_empty() {
            return Err(ApiError::InvalidParameter(
                "attribute_list must contain at least one attribute".to_string(),
            ));
        }

        Ok(format!(
            "<{tag}>{}</{tag}>",
            escape_text(&request.attribute_list),
            tag = ATTRIBUTE_LIST
        ))
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}
