//! # wemo-parser
//!
//! XML parsing for the attribute lists exchanged with WeMo devices through the
//! `deviceevent` service (`GetAttributes`, `SetAttributes` and `attributeList`
//! event notifications).
//!
//! ## Usage
//!
//! ```rust
//! use wemo_parser::AttributeList;
//!
//! let list = AttributeList::from_fragment(
//!     "<attribute><name>FanMode</name><value>3</value></attribute>",
//! ).unwrap();
//! assert_eq!(list.get("FanMode"), Some("3"));
//! ```

pub mod attribute_list;
pub mod error;
pub mod xml_decode;

pub use attribute_list::{Attribute, AttributeList};
pub use error::{ParseError, ParseResult};
