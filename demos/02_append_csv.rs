use natgrid_rs::{GridSnapshotFetcher, NgClient, SnapshotConfig};

// Usage: cargo run --example 02_append_csv -- '{"output_directory":"data","file_name":"nts_demand.csv"}'
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| r#"{"output_directory": "data", "file_name": "nts_demand.csv"}"#.to_string());
    let config = SnapshotConfig::from_json_str(&raw)?;

    let client = NgClient::default();
    let fetcher = GridSnapshotFetcher::from_config(&client, &config)?.csv_header(true);

    // Synchronous callers use the blocking entry point.
    let table = fetcher.collect_data_blocking()?;

    match fetcher.target() {
        Some(target) => println!("appended {} rows to {}", table.len(), target.path().display()),
        None => println!("fetched {} rows (no CSV output configured)", table.len()),
    }
    Ok(())
}
