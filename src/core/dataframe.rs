use polars::prelude::*;

use crate::flow::{FlowTable, HEADER};

/// Trait for converting snapshot data structures into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Creates an empty DataFrame with the correct schema for this type.
    fn empty_dataframe() -> PolarsResult<DataFrame>
    where
        Self: Sized;

    /// Returns the flattened schema for this type.
    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>>
    where
        Self: Sized;
}

impl ToDataFrame for FlowTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        // Every column is text: flow rates are passed through as received.
        let columns = HEADER
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values: Vec<&str> = self.iter().map(|row| row.as_record()[i]).collect();
                Column::new((*name).into(), values)
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }

    fn empty_dataframe() -> PolarsResult<DataFrame> {
        FlowTable::default().to_dataframe()
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(HEADER.iter().map(|name| (*name, DataType::String)).collect())
    }
}
