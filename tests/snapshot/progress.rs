use httpmock::MockServer;
use natgrid_rs::{GridSnapshotFetcher, Progress};
use std::sync::{Arc, Mutex};

use crate::common::{client_for, fixture, mock_flow};

fn recorder() -> (Arc<Mutex<Vec<Progress>>>, impl Fn(&Progress) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let seen = Arc::clone(&seen);
        move |p: &Progress| seen.lock().unwrap().push(*p)
    };
    (seen, sink)
}

#[tokio::test]
async fn verbose_reports_every_stage_in_order() {
    let server = MockServer::start();
    let _mock = mock_flow(&server, fixture("instantaneous_flow_demand"));
    let client = client_for(&server);
    let (seen, sink) = recorder();

    GridSnapshotFetcher::new(&client)
        .on_progress(sink)
        .collect_data()
        .await
        .unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            Progress::CheckingInput,
            Progress::Retrieving,
            Progress::Formatting { total: 3 },
            Progress::Row { index: 0, total: 3 },
            Progress::Row { index: 1, total: 3 },
            Progress::Row { index: 2, total: 3 },
            Progress::Returning,
        ]
    );
}

#[tokio::test]
async fn quiet_fetch_reports_nothing_and_returns_same_rows() {
    let server = MockServer::start();
    let _mock = mock_flow(&server, fixture("instantaneous_flow_demand"));
    let client = client_for(&server);

    let (seen, sink) = recorder();
    let quiet = GridSnapshotFetcher::new(&client)
        .verbose(false)
        .on_progress(sink)
        .collect_data()
        .await
        .unwrap();
    assert!(seen.lock().unwrap().is_empty());

    let loud = GridSnapshotFetcher::new(&client).collect_data().await.unwrap();
    assert_eq!(quiet, loud);
}
