//! DeviceEventClient tests against a mock HTTP device

use mockito::{Matcher, Server};
use wemo_api::{ApiError, DeviceEventClient, DeviceEvents, WemoClient};

const CONTROL_PATH: &str = "/upnp/control/deviceevent1";

fn client_for(server: &Server) -> DeviceEventClient {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mock server address has a port");
    DeviceEventClient::new(WemoClient::new(), host, port.parse().unwrap())
}

fn soap_response(action: &str, inner: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
<s:Body>
<u:{action}Response xmlns:u="urn:Belkin:service:deviceevent:1">{inner}</u:{action}Response>
</s:Body>
</s:Envelope>"#
    )
}

#[test]
fn test_get_attributes_returns_unescaped_list() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", CONTROL_PATH)
        .match_header(
            "SOAPACTION",
            "\"urn:Belkin:service:deviceevent:1#GetAttributes\"",
        )
        .with_status(200)
        .with_header("content-type", "text/xml; charset=\"utf-8\"")
        .with_body(soap_response(
            "GetAttributes",
            "<attributeList>&lt;attribute&gt;&lt;name&gt;FanMode&lt;/name&gt;&lt;value&gt;3&lt;/value&gt;&lt;/attribute&gt;</attributeList>",
        ))
        .create();

    let device = client_for(&server);
    let list = device.get_attributes().unwrap();

    assert_eq!(list, "<attribute><name>FanMode</name><value>3</value></attribute>");
    mock.assert();
}

#[test]
fn test_set_attributes_sends_escaped_fragment() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", CONTROL_PATH)
        .match_header(
            "SOAPACTION",
            "\"urn:Belkin:service:deviceevent:1#SetAttributes\"",
        )
        .match_body(Matcher::Regex(
            "<attributeList>&lt;attribute&gt;&lt;name&gt;FanMode&lt;/name&gt;&lt;value&gt;4&lt;/value&gt;&lt;/attribute&gt;</attributeList>".to_string(),
        ))
        .with_status(200)
        .with_body(soap_response("SetAttributes", ""))
        .create();

    let device = client_for(&server);
    device
        .set_attributes("<attribute><name>FanMode</name><value>4</value></attribute>")
        .unwrap();

    mock.assert();
}

#[test]
fn test_soap_fault_surfaces_error_code() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", CONTROL_PATH)
        .with_status(500)
        .with_body(
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><s:Fault><faultcode>s:Client</faultcode><faultstring>UPnPError</faultstring><detail><UPnPError xmlns="urn:schemas-upnp-org:control-1-0"><errorCode>402</errorCode><errorDescription>Invalid Args</errorDescription></UPnPError></detail></s:Fault></s:Body></s:Envelope>"#,
        )
        .create();

    let device = client_for(&server);
    let result = device.set_attributes("<attribute><name>FanMode</name><value>9</value></attribute>");

    assert!(matches!(result, Err(ApiError::SoapFault(402))));
}

#[test]
fn test_garbage_response_is_parse_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", CONTROL_PATH)
        .with_status(200)
        .with_body("not xml at all")
        .create();

    let device = client_for(&server);
    assert!(matches!(device.get_attributes(), Err(ApiError::ParseError(_))));
}

#[test]
fn test_empty_set_is_rejected_before_sending() {
    let mut server = Server::new();
    let mock = server.mock("POST", CONTROL_PATH).expect(0).create();

    let device = client_for(&server);
    let result = device.set_attributes("");

    assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    mock.assert();
}
