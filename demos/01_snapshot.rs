use natgrid_rs::{GridSnapshotFetcher, NgClient, Progress};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A client with a timeout; the default has none.
    let client = NgClient::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    // 2. Fetch the live snapshot, printing each stage as it happens.
    let table = GridSnapshotFetcher::new(&client)
        .on_progress(|p: &Progress| eprintln!("[natgrid] {}", p.describe()))
        .collect_data()
        .await?;

    println!("{}", table.header().join(" | "));
    for row in &table {
        println!("{}", row.as_record().join(" | "));
    }

    // 3. The same rows as CSV text.
    println!();
    print!("{}", table.to_csv_string(true)?);

    Ok(())
}
