use soap_client::SoapClient;
use tracing::debug;

use crate::{Result, WemoOperation};

/// A client for executing WeMo operations against actual devices
///
/// This client bridges the stateless operation definitions and actual
/// network requests. It uses the soap-client crate for the underlying SOAP
/// communication and is cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct WemoClient {
    soap_client: SoapClient,
}

impl WemoClient {
    /// Create a new client with default transport timeouts
    pub fn new() -> Self {
        Self {
            soap_client: SoapClient::new(),
        }
    }

    /// Create a client with a custom SOAP client (e.g. custom timeouts)
    pub fn with_soap_client(soap_client: SoapClient) -> Self {
        Self { soap_client }
    }

    /// Execute a WeMo operation against a device
    ///
    /// Builds the payload for `request`, sends it to the operation's service
    /// endpoint and parses the response.
    ///
    /// # Example
    /// ```rust,no_run
    /// use wemo_api::WemoClient;
    /// use wemo_api::operations::{GetAttributesOperation, GetAttributesRequest};
    ///
    /// let client = WemoClient::new();
    /// let response = client.execute::<GetAttributesOperation>(
    ///     "192.168.1.60",
    ///     49153,
    ///     &GetAttributesRequest,
    /// )?;
    /// println!("{}", response.attribute_list);
    /// # Ok::<(), wemo_api::ApiError>(())
    /// ```
    pub fn execute<Op: WemoOperation>(
        &self,
        host: &str,
        port: u16,
        request: &Op::Request,
    ) -> Result<Op::Response> {
        let service_info = Op::SERVICE.info();
        let payload = Op::build_payload(request)?;

        debug!(
            host,
            port,
            service = Op::SERVICE.name(),
            action = Op::ACTION,
            "executing operation"
        );

        let xml = self.soap_client.call(
            host,
            port,
            service_info.endpoint,
            service_info.service_uri,
            Op::ACTION,
            &payload,
        )?;

        Op::parse_response(&xml)
    }
}
