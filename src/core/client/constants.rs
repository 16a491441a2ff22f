//! Centralized constants for the default endpoint, SOAP payload and UA.

/// Default desktop UA; the service rejects some bare library agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// National Grid instantaneous flow web service (SOAP 1.1).
pub(crate) const DEFAULT_ENDPOINT: &str =
    "http://energywatch.natgrid.co.uk/EDP-PublicUI/PublicPI/InstantaneousFlowWebService.asmx?WSDL";

/// XML namespace of the EDP public UI operations.
pub(crate) const EDP_NAMESPACE: &str = "http://www.NationalGrid.com/EDP/UI/";

/// `SOAPAction` header value for `GetInstantaneousFlowData`.
pub(crate) const SOAP_ACTION: &str =
    "\"http://www.NationalGrid.com/EDP/UI/GetInstantaneousFlowData\"";

/// Fixed request body. The operation takes no parameters.
pub(crate) const INSTANTANEOUS_FLOW_REQUEST: &str = concat!(
    r#"<?xml version="1.0" encoding="utf-8"?>"#,
    "\n",
    r#"<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
    r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
    "\n  <soap:Body>\n",
    r#"    <GetInstantaneousFlowData xmlns="http://www.NationalGrid.com/EDP/UI/" />"#,
    "\n  </soap:Body>\n</soap:Envelope>"
);
