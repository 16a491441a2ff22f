use std::sync::Arc;

/// Stages reported while a snapshot is collected.
///
/// Purely informational: nothing about the returned data depends on whether
/// anyone listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Configuration accepted, about to start.
    CheckingInput,
    /// Request sent, waiting for the service.
    Retrieving,
    /// Envelope parsed; `total` observations will be formatted.
    Formatting { total: usize },
    /// Observation `index` (zero-based) formatted and, if configured, written.
    Row { index: usize, total: usize },
    /// All rows done, table about to be returned.
    Returning,
}

impl Progress {
    pub fn describe(&self) -> String {
        match self {
            Progress::CheckingInput => "Checking if input parameters are correct.".to_string(),
            Progress::Retrieving => "Retrieving data.".to_string(),
            Progress::Formatting { total } => format!("Formatting {total} observations."),
            Progress::Row { index, total } => format!("Formatted row {} of {total}.", index + 1),
            Progress::Returning => "Returning output.".to_string(),
        }
    }
}

/// Callback invoked for every [`Progress`] stage.
pub type ProgressFn = Arc<dyn Fn(&Progress) + Send + Sync>;

pub(crate) fn report(sink: Option<&ProgressFn>, stage: Progress) {
    #[cfg(feature = "tracing")]
    {
        match stage {
            Progress::Row { .. } => tracing::trace!(?stage, "{}", stage.describe()),
            _ => tracing::info!(?stage, "{}", stage.describe()),
        }
    }

    if let Some(cb) = sink {
        cb(&stage);
    }
}
