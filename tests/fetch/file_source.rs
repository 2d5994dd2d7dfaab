//! Local file fetching through the public fetcher.

use model_fetch::ErrorKind;

use crate::fixture::{file_uri, make_fixture, model_bytes};

#[test]
fn test_file_round_trip() {
    let fixture = make_fixture(&[]);
    for len in [0usize, 1, 2048, 100_003] {
        let content = model_bytes(len);
        let path = fixture.write_file(&format!("model_{}.tflite", len), &content);

        let data = fixture.fetcher.fetch(&file_uri(&path)).unwrap();
        assert_eq!(data.len(), len);
        assert_eq!(data, content);
    }
}

#[test]
fn test_file_extension_case_insensitive() {
    let fixture = make_fixture(&[]);
    let path = fixture.write_file("Detector.TFLITE", b"tfl3");
    assert_eq!(fixture.fetcher.fetch(&file_uri(&path)).unwrap(), b"tfl3");
}

#[test]
fn test_file_disallowed_extension() {
    let fixture = make_fixture(&[]);
    for name in ["model.bin", "model.onnx", "model.tflite.txt", "model"] {
        let path = fixture.write_file(name, &model_bytes(64));
        let err = fixture.fetcher.fetch(&file_uri(&path)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SecurityViolation, "file {}", name);
    }
}

#[test]
fn test_file_missing() {
    let fixture = make_fixture(&[]);
    let path = fixture.dir.path().join("nowhere.tflite");
    let err = fixture.fetcher.fetch(&file_uri(&path)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
