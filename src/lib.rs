//! natgrid-rs: client for the National Grid instantaneous gas flow web service.
//!
//! Fetches the live NTS demand snapshot over SOAP, reshapes it into flat rows
//! and returns them as a [`FlowTable`], optionally appending each row to a CSV file.
//!
//! ```no_run
//! # async fn run() -> Result<(), natgrid_rs::NgError> {
//! use natgrid_rs::{GridSnapshotFetcher, NgClient};
//!
//! let client = NgClient::default();
//! let table = GridSnapshotFetcher::new(&client).verbose(false).collect_data().await?;
//! for row in &table {
//!     println!("{} {} {}", row.time_applicable, row.series_name, row.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod flow;

pub use crate::core::{NgClient, NgClientBuilder, NgError};
pub use flow::{
    CsvTarget, DemandRecord, FlowObservation, FlowRow, FlowTable, GridSnapshotFetcher, HEADER,
    Progress, SeriesSelector, SnapshotConfig,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
