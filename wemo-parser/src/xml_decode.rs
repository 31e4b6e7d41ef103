//! XML decoding utilities for WeMo attribute payloads.
//!
//! WeMo devices send attribute lists as bare sequences of `<attribute>`
//! elements, and the transport escapes the nested markup one level more than
//! the SOAP envelope accounts for. These helpers undo that before handing the
//! text to `quick-xml`.

use crate::error::{ParseError, ParseResult};
use serde::de::DeserializeOwned;

/// Name of the synthetic element wrapped around bare fragments.
pub const FRAGMENT_ROOT: &str = "attributes";

/// Parse an XML string into a deserializable type.
pub fn parse<T: DeserializeOwned>(xml: &str) -> ParseResult<T> {
    quick_xml::de::from_str(xml).map_err(|e| ParseError::XmlDeserializationFailed(e.to_string()))
}

/// Reverse the extra `&gt;`/`&lt;` escaping applied to nested markup.
///
/// Only angle brackets are restored; any other entity is left for the XML
/// parser to resolve.
pub fn unescape_markup(xml: &str) -> String {
    xml.replace("&gt;", ">").replace("&lt;", "<")
}

/// Wrap a root-less fragment in [`FRAGMENT_ROOT`] and restore its markup.
pub fn wrap_fragment(fragment: &str) -> String {
    unescape_markup(&format!("<{FRAGMENT_ROOT}>{fragment}</{FRAGMENT_ROOT}>"))
}

/// Escape text for embedding as XML character data.
pub fn escape_text(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}
