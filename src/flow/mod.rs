mod api;
mod config;
mod model;
mod progress;
mod sink;
mod wire;

use std::sync::Arc;

pub use api::{LEGACY_DEMAND_INDEX, NTS_DEMAND_SERIES, SeriesSelector};
pub use config::SnapshotConfig;
pub use model::{DemandRecord, FlowObservation, FlowRow, FlowTable, HEADER};
pub use progress::{Progress, ProgressFn};
pub use sink::CsvTarget;

use crate::{NgClient, NgError};

/// Fetches the current NTS demand snapshot and reshapes it into a [`FlowTable`].
///
/// Every call requests the same live snapshot; nothing is cached between calls.
/// When an output location is set, each row is appended to the CSV file as soon
/// as it is formatted, so rows written before a failure stay on disk.
///
/// ```no_run
/// # async fn run() -> Result<(), natgrid_rs::NgError> {
/// let client = natgrid_rs::NgClient::default();
/// let table = natgrid_rs::GridSnapshotFetcher::new(&client)
///     .output("data", "nts_demand.csv")?
///     .collect_data()
///     .await?;
/// println!("{} rows", table.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GridSnapshotFetcher<'a> {
    client: &'a NgClient,
    target: Option<CsvTarget>,
    selector: SeriesSelector,
    verbose: bool,
    csv_header: bool,
    progress: Option<ProgressFn>,
}

impl<'a> GridSnapshotFetcher<'a> {
    /// Creates a fetcher that only returns the table (no CSV output), with progress reporting on.
    pub fn new(client: &'a NgClient) -> Self {
        Self {
            client,
            target: None,
            selector: SeriesSelector::default(),
            verbose: true,
            csv_header: false,
            progress: None,
        }
    }

    /// Builds a fetcher from a [`SnapshotConfig`].
    ///
    /// CSV output is enabled only when both `output_directory` and `file_name` are set.
    pub fn from_config(client: &'a NgClient, config: &SnapshotConfig) -> Result<Self, NgError> {
        let mut fetcher = Self::new(client).verbose(config.verbose);

        if let Some((dir, file)) = config.output_parts() {
            fetcher = fetcher.output(dir, file)?;
        } else if config.is_half_configured() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                output_directory = ?config.output_directory,
                file_name = ?config.file_name,
                "only one of output_directory/file_name set; CSV output disabled"
            );
        }

        Ok(fetcher)
    }

    /// Appends every row to `{output_directory}/{file_name}`.
    ///
    /// Fails if either part is empty or `file_name` does not end in `.csv`.
    pub fn output(mut self, output_directory: impl AsRef<std::path::Path>, file_name: &str) -> Result<Self, NgError> {
        self.target = Some(CsvTarget::new(output_directory, file_name)?);
        Ok(self)
    }

    /// Turns progress reporting on or off. Default: on.
    pub fn verbose(mut self, yes: bool) -> Self {
        self.verbose = yes;
        self
    }

    /// Registers a callback that receives each [`Progress`] stage while `verbose` is on.
    pub fn on_progress(mut self, cb: impl Fn(&Progress) + Send + Sync + 'static) -> Self {
        self.progress = Some(Arc::new(cb));
        self
    }

    /// Chooses how the demand series is found in the response.
    /// Default: by the name `"NTS Demand Flow"`.
    pub fn series(mut self, selector: SeriesSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Write the column header when the CSV file is new or empty. Default: off.
    pub fn csv_header(mut self, yes: bool) -> Self {
        self.csv_header = yes;
        self
    }

    /// The configured CSV output, if any.
    pub fn target(&self) -> Option<&CsvTarget> {
        self.target.as_ref()
    }

    /// Fetches the snapshot and returns all rows.
    ///
    /// # Errors
    /// Transport and status failures, a response that does not match the expected
    /// layout, a missing series, any malformed timestamp, or a failed CSV append.
    /// A single bad observation fails the whole call.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err(level = "warn"), fields(endpoint = %self.client.endpoint())))]
    pub async fn collect_data(&self) -> Result<FlowTable, NgError> {
        self.report(Progress::CheckingInput);
        self.report(Progress::Retrieving);

        let envelope = api::fetch_envelope(self.client).await?;
        let series = api::select_series(envelope, &self.selector)?;
        let total = series.entries.len();

        self.report(Progress::Formatting { total });

        if let Some(target) = &self.target {
            target.prepare(self.csv_header)?;
        }

        let mut rows = Vec::with_capacity(total);
        for (index, entry) in series.entries.iter().enumerate() {
            let observation = api::to_observation(entry)?;
            let row = FlowRow::from_observation(&series.name, &observation);
            if let Some(target) = &self.target {
                target.append(&row)?;
            }
            rows.push(row);
            self.report(Progress::Row { index, total });
        }

        self.report(Progress::Returning);
        Ok(FlowTable::new(rows))
    }

    /// Blocking variant of [`collect_data`](Self::collect_data) for synchronous callers.
    ///
    /// Runs on a private current-thread runtime; do not call from inside an async context.
    pub fn collect_data_blocking(&self) -> Result<FlowTable, NgError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(NgError::Runtime)?;
        rt.block_on(self.collect_data())
    }

    /// Fetches the snapshot as typed observations. Never writes to the CSV output.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err(level = "warn"), fields(endpoint = %self.client.endpoint())))]
    pub async fn fetch_record(&self) -> Result<DemandRecord, NgError> {
        let envelope = api::fetch_envelope(self.client).await?;
        let series = api::select_series(envelope, &self.selector)?;
        let observations = series
            .entries
            .iter()
            .map(api::to_observation)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DemandRecord {
            series_name: series.name,
            observations,
        })
    }

    fn report(&self, stage: Progress) {
        if self.verbose {
            progress::report(self.progress.as_ref(), stage);
        }
    }
}
