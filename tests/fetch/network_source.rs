//! Network fetching against a local mock server.

use model_fetch::ErrorKind;

use crate::fixture::{make_fixture, model_bytes};

#[test]
fn test_network_body_returned_verbatim() {
    let mut server = mockito::Server::new();
    let content = model_bytes(70_000);
    let mock = server
        .mock("GET", "/models/pose.tflite")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(&content)
        .create();

    let fixture = make_fixture(&[]);
    let data = fixture
        .fetcher
        .fetch(&format!("{}/models/pose.tflite", server.url()))
        .unwrap();
    assert_eq!(data, content);
    mock.assert();
}

#[test]
fn test_network_failures_are_transport() {
    let mut server = mockito::Server::new();
    let _mocks = [
        server.mock("GET", "/gone.tflite").with_status(404).create(),
        server.mock("GET", "/broken.tflite").with_status(500).create(),
        server
            .mock("GET", "/empty.tflite")
            .with_status(200)
            .with_body("")
            .create(),
    ];

    let fixture = make_fixture(&[]);
    for route in ["/gone.tflite", "/broken.tflite", "/empty.tflite"] {
        let err = fixture
            .fetcher
            .fetch(&format!("{}{}", server.url(), route))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportFailure, "route {}", route);
    }
}

#[test]
fn test_concurrent_network_fetches() {
    let mut server = mockito::Server::new();
    let content = model_bytes(4096);
    let mock = server
        .mock("GET", "/shared.tflite")
        .with_status(200)
        .with_body(&content)
        .expect(8)
        .create();

    let fixture = make_fixture(&[]);
    let url = format!("{}/shared.tflite", server.url());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| fixture.fetcher.fetch(&url)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), content);
        }
    });
    mock.assert();
}
