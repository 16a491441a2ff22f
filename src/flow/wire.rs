//! Typed mirror of the `GetInstantaneousFlowData` SOAP response.
//!
//! Only the path down to the energy data entries is modelled; sibling
//! elements and attributes (`xmlns`, report metadata) are ignored.
//! Prefixed element names are accepted with or without the `soap:` prefix.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "Body", alias = "soap:Body")]
    pub(crate) body: Body,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Body {
    #[serde(rename = "GetInstantaneousFlowDataResponse")]
    pub(crate) response: FlowDataResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlowDataResponse {
    #[serde(rename = "GetInstantaneousFlowDataResult")]
    pub(crate) result: FlowDataResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlowDataResult {
    #[serde(rename = "EDPReportPage")]
    pub(crate) report_page: ReportPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportPage {
    #[serde(rename = "EDPEnergyGraphTableCollection")]
    pub(crate) graph_tables: GraphTableCollection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphTableCollection {
    #[serde(rename = "EDPEnergyGraphTableBE", default)]
    pub(crate) tables: Vec<GraphTable>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphTable {
    #[serde(rename = "EDPObjectCollection")]
    pub(crate) objects: ObjectCollection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObjectCollection {
    // Usually exactly one object per table.
    #[serde(rename = "EDPObjectBE", default)]
    pub(crate) objects: Vec<EdpObject>,
}

// Both fields are optional here: only the selected series has to be complete.
#[derive(Debug, Deserialize)]
pub(crate) struct EdpObject {
    #[serde(rename = "EDPObjectName", default)]
    pub(crate) name: String,
    #[serde(rename = "EnergyDataList", default)]
    pub(crate) energy_data: Option<EnergyDataList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnergyDataList {
    #[serde(rename = "EDPEnergyDataBE", default)]
    pub(crate) entries: Vec<EnergyData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnergyData {
    #[serde(rename = "ScheduleTime")]
    pub(crate) schedule_time: String,
    // Kept as text, never coerced.
    #[serde(rename = "FlowRate")]
    pub(crate) flow_rate: String,
    #[serde(rename = "ApplicableAt")]
    pub(crate) applicable_at: String,
}
