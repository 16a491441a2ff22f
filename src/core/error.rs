use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NgError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A configuration record could not be read, usually because a field had the wrong type.
    #[error("invalid configuration record: {0}")]
    Config(String),

    /// Configuration values were well typed but not usable (empty path, missing `.csv` suffix).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The response body was not well-formed XML or did not match the expected SOAP layout.
    #[error("response shape unexpected: {0}")]
    Shape(String),

    /// No series in the response matched the requested selector.
    #[error("series {wanted} not found in response (available: {available:?})")]
    SeriesNotFound {
        /// Human-readable description of the selector.
        wanted: String,
        /// Names of every series present in the response, in document order.
        available: Vec<String>,
    },

    /// An observation timestamp did not match `YYYY-MM-DDTHH:MM:SS`.
    #[error("bad {field} timestamp {value:?}, expected YYYY-MM-DDTHH:MM:SS")]
    Timestamp {
        /// The XML element the value came from (`ScheduleTime` or `ApplicableAt`).
        field: &'static str,
        /// The raw value as received.
        value: String,
        /// The chrono parse error, when the text had the right layout but an out-of-range field.
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Filesystem failure while writing the CSV target.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be serialised as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The runtime used by the blocking entry point could not be started.
    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
