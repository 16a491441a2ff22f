use httpmock::MockServer;
use natgrid_rs::{GridSnapshotFetcher, NgError, SnapshotConfig};
use std::fs;

use crate::common::{client_for, fixture, mock_flow};

#[tokio::test]
async fn rows_are_appended_after_existing_content() {
    let server = MockServer::start();
    let _mock = mock_flow(&server, fixture("instantaneous_flow_demand"));
    let client = client_for(&server);

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nts_demand.csv");
    fs::write(&path, "previous,run\n").unwrap();

    let table = GridSnapshotFetcher::new(&client)
        .verbose(false)
        .output(tmp.path(), "nts_demand.csv")
        .unwrap()
        .collect_data()
        .await
        .unwrap();

    // The table is returned even when writing to disk.
    assert_eq!(table.len(), 3);

    let written = fs::read_to_string(&path).unwrap();
    let expected = format!("previous,run\n{}", table.to_csv_string(false).unwrap());
    assert_eq!(written, expected);
    assert_eq!(
        written.lines().nth(1),
        Some("NTS Demand Flow,\"01/06/2023, 10:00\",100,\"01/06/2023, 10:00\",N,N,,N,N")
    );
}

#[tokio::test]
async fn missing_output_directory_is_created_and_file_is_a_file() {
    let server = MockServer::start();
    let _mock = mock_flow(&server, fixture("instantaneous_flow_demand"));
    let client = client_for(&server);

    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("exports").join("gas");

    GridSnapshotFetcher::new(&client)
        .verbose(false)
        .output(&dir, "demand.csv")
        .unwrap()
        .collect_data()
        .await
        .unwrap();

    let path = dir.join("demand.csv");
    assert!(dir.is_dir());
    assert!(path.is_file());
    assert_eq!(fs::read_to_string(path).unwrap().lines().count(), 3);
}

#[tokio::test]
async fn header_is_written_once_for_new_files() {
    let server = MockServer::start();
    let _mock = mock_flow(&server, fixture("instantaneous_flow_demand"));
    let client = client_for(&server);

    let tmp = tempfile::tempdir().unwrap();
    let fetcher = GridSnapshotFetcher::new(&client)
        .verbose(false)
        .csv_header(true)
        .output(tmp.path(), "demand.csv")
        .unwrap();

    fetcher.collect_data().await.unwrap();
    fetcher.collect_data().await.unwrap();

    let text = fs::read_to_string(tmp.path().join("demand.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + 3 + 3);
    assert!(lines[0].starts_with("NTS Demand Flow,Time Published,Value"));
    assert_eq!(lines.iter().filter(|l| l.contains("Time Published")).count(), 1);
}

#[tokio::test]
async fn config_record_enables_output_only_with_both_parts() {
    let server = MockServer::start();
    let _mock = mock_flow(&server, fixture("instantaneous_flow_demand"));
    let client = client_for(&server);
    let tmp = tempfile::tempdir().unwrap();

    let cfg = SnapshotConfig::from_json_value(serde_json::json!({
        "output_directory": tmp.path().to_str().unwrap(),
        "file_name": "from_config.csv",
        "verbose": false,
    }))
    .unwrap();
    let fetcher = GridSnapshotFetcher::from_config(&client, &cfg).unwrap();
    assert!(fetcher.target().is_some());
    fetcher.collect_data().await.unwrap();
    assert_eq!(
        fs::read_to_string(tmp.path().join("from_config.csv")).unwrap().lines().count(),
        3
    );

    let half = SnapshotConfig::from_json_str(r#"{"file_name": "orphan.csv"}"#).unwrap();
    let fetcher = GridSnapshotFetcher::from_config(&client, &half).unwrap();
    assert!(fetcher.target().is_none());
    assert_eq!(fetcher.collect_data().await.unwrap().len(), 3);
}

#[test]
fn bad_config_fails_before_any_request() {
    let err = SnapshotConfig::from_json_str(r#"{"output_directory": "out", "file_name": 123}"#)
        .unwrap_err();
    assert!(matches!(err, NgError::Config(_)), "got {err:?}");

    let client = natgrid_rs::NgClient::default();
    let cfg = SnapshotConfig::from_json_str(r#"{"output_directory": "out", "file_name": "demand.txt"}"#)
        .unwrap();
    let err = GridSnapshotFetcher::from_config(&client, &cfg).err().unwrap();
    assert!(matches!(err, NgError::InvalidConfig(_)), "got {err:?}");
}
