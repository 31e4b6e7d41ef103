//! Attribute list parsing and serialization.
//!
//! WeMo appliances (Humidifier, Heater, Coffee Maker, ...) describe their
//! state as a flat list of name/value pairs:
//!
//! ```xml
//! <attribute><name>FanMode</name><value>3</value></attribute>
//! <attribute><name>CurrentHumidity</name><value>42.5</value></attribute>
//! ```
//!
//! The list has no root element of its own. [`AttributeList`] keeps the pairs
//! in document order as raw text; typed interpretation belongs to the device
//! crates.

use crate::error::ParseResult;
use crate::xml_decode::{escape_text, parse, wrap_fragment};
use serde::Deserialize;

/// A single raw name/value pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attribute {
    /// Attribute name, e.g. `FanMode`
    #[serde(default)]
    pub name: String,
    /// Unconverted value text; empty when the device sent no text
    #[serde(default)]
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Serialize as a single `<attribute>` element
    pub fn to_xml(&self) -> String {
        format!(
            "<attribute><name>{}</name><value>{}</value></attribute>",
            escape_text(&self.name),
            escape_text(&self.value)
        )
    }
}

/// Ordered attribute list as exchanged with the `deviceevent` service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttributeList {
    #[serde(rename = "attribute", default)]
    attributes: Vec<Attribute>,
}

impl AttributeList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a root-less attribute fragment.
    ///
    /// The fragment is wrapped in a synthetic root and its escaped angle
    /// brackets are restored first. Malformed markup fails the whole parse.
    pub fn from_fragment(fragment: &str) -> ParseResult<Self> {
        parse(&wrap_fragment(fragment))
    }

    /// Append an attribute, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(Attribute::new(name, value.to_string()));
        self
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Attributes in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Value of the last attribute with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Serialize back into a root-less fragment (unescaped; the transport
    /// escapes it when embedding in a SOAP body)
    pub fn to_fragment(&self) -> String {
        self.attributes.iter().map(Attribute::to_xml).collect()
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
