#![allow(dead_code)]

use httpmock::{Method::POST, Mock, MockServer};
use natgrid_rs::NgClient;
use std::{env, fs, path::Path};
use url::Url;

pub const SOAP_PATH: &str = "/EDP-PublicUI/PublicPI/InstantaneousFlowWebService.asmx";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.xml"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub const SOAP_ACTION: &str = "\"http://www.NationalGrid.com/EDP/UI/GetInstantaneousFlowData\"";

/// Answers only the exact SOAP call the client is expected to make.
pub fn mock_flow<'a>(server: &'a MockServer, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(SOAP_PATH)
            .header("content-type", "text/xml")
            .header("soapaction", SOAP_ACTION)
            .body_includes("<soap:Body>")
            .body_includes("<GetInstantaneousFlowData xmlns=\"http://www.NationalGrid.com/EDP/UI/\"");
        then.status(200)
            .header("content-type", "text/xml; charset=utf-8")
            .body(body);
    })
}

pub fn client_for(server: &MockServer) -> NgClient {
    NgClient::builder()
        .endpoint(Url::parse(&format!("{}{}", server.base_url(), SOAP_PATH)).unwrap())
        .build()
        .unwrap()
}

pub fn is_recording() -> bool {
    env::var("NG_RECORD").ok().as_deref() == Some("1")
}

pub fn live_or_record_enabled() -> bool {
    is_recording() || env::var("NG_LIVE").ok().as_deref() == Some("1")
}
