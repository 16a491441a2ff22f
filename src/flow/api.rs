use std::fmt;

use reqwest::header::CONTENT_TYPE;

use crate::core::client::constants::{INSTANTANEOUS_FLOW_REQUEST, SOAP_ACTION};
use crate::core::{NgClient, NgError};
use crate::flow::model::{FlowObservation, parse_source_time};
use crate::flow::wire::{EdpObject, EnergyData, Envelope};

/// Label of the total NTS demand series.
pub const NTS_DEMAND_SERIES: &str = "NTS Demand Flow";

/// Slot the demand series historically occupied in the graph table collection.
pub const LEGACY_DEMAND_INDEX: usize = 4;

/// How the demand series is located inside the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesSelector {
    /// Match `EDPObjectName`, ignoring case and surrounding whitespace.
    Name(String),
    /// Take the first object of the n-th graph table, whatever it is called.
    Index(usize),
}

impl SeriesSelector {
    /// Positional lookup at slot 4, as older consumers of the service did.
    pub fn legacy() -> Self {
        SeriesSelector::Index(LEGACY_DEMAND_INDEX)
    }
}

impl Default for SeriesSelector {
    fn default() -> Self {
        SeriesSelector::Name(NTS_DEMAND_SERIES.to_string())
    }
}

impl fmt::Display for SeriesSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesSelector::Name(name) => write!(f, "named {name:?}"),
            SeriesSelector::Index(i) => write!(f, "at table index {i}"),
        }
    }
}

pub(super) async fn fetch_envelope(client: &NgClient) -> Result<Envelope, NgError> {
    let url = client.endpoint().clone();

    let resp = client
        .http()
        .post(url.clone())
        .header(CONTENT_TYPE, "text/xml")
        .header("SOAPAction", SOAP_ACTION)
        .body(INSTANTANEOUS_FLOW_REQUEST)
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(NgError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = crate::core::net::get_text(resp, "instantaneous_flow", "xml").await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = body.len(), "instantaneous flow response received");

    decode_envelope(&body)
}

pub(super) fn decode_envelope(body: &str) -> Result<Envelope, NgError> {
    quick_xml::de::from_str(body).map_err(|e| NgError::Shape(format!("xml decode error: {e}")))
}

/// The located series, checked to carry a name and a data list.
#[derive(Debug)]
pub(super) struct SelectedSeries {
    pub(super) name: String,
    pub(super) entries: Vec<EnergyData>,
}

/// Finds the requested series, consuming the envelope.
///
/// Other series in the response may be partial; only the selected one must be complete.
pub(super) fn select_series(envelope: Envelope, selector: &SeriesSelector) -> Result<SelectedSeries, NgError> {
    let tables = envelope.body.response.result.report_page.graph_tables.tables;

    let available: Vec<String> = tables
        .iter()
        .flat_map(|t| t.objects.objects.iter().map(|o| o.name.clone()))
        .filter(|name| !name.trim().is_empty())
        .collect();

    let found = match selector {
        SeriesSelector::Name(wanted) => {
            let wanted = wanted.trim();
            tables
                .into_iter()
                .flat_map(|t| t.objects.objects)
                .find(|o| o.name.trim().eq_ignore_ascii_case(wanted))
        }
        SeriesSelector::Index(i) => tables
            .into_iter()
            .nth(*i)
            .and_then(|t| t.objects.objects.into_iter().next()),
    };

    let found = found.ok_or_else(|| NgError::SeriesNotFound {
        wanted: selector.to_string(),
        available,
    })?;
    complete(found, selector)
}

fn complete(object: EdpObject, selector: &SeriesSelector) -> Result<SelectedSeries, NgError> {
    if object.name.trim().is_empty() {
        return Err(NgError::Shape(format!("series {selector} has no EDPObjectName")));
    }
    let Some(list) = object.energy_data else {
        return Err(NgError::Shape(format!(
            "series {:?} has no EnergyDataList",
            object.name
        )));
    };
    Ok(SelectedSeries {
        name: object.name,
        entries: list.entries,
    })
}

pub(super) fn to_observation(entry: &EnergyData) -> Result<FlowObservation, NgError> {
    Ok(FlowObservation {
        schedule_time: parse_source_time("ScheduleTime", &entry.schedule_time)?,
        flow_rate: entry.flow_rate.clone(),
        applicable_at: parse_source_time("ApplicableAt", &entry.applicable_at)?,
    })
}
