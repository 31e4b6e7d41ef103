//! Operation definitions grouped by UPnP service

pub mod device_event;

pub use device_event::{
    GetAttributesOperation, GetAttributesRequest, GetAttributesResponse, SetAttributesOperation,
    SetAttributesRequest,
};
