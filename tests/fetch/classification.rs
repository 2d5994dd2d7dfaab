//! Identifier classification, checked without touching any source.

use std::path::PathBuf;

use model_fetch::{ErrorKind, ModelSource};

#[test]
fn test_every_identifier_maps_to_one_kind() {
    let cases = [
        ("file:///sdcard/model.tflite", "file"),
        ("https://example.com/model.tflite", "network"),
        ("http://10.0.2.2:8081/assets/model.tflite", "network"),
        ("s3://bucket/model.tflite", "network"),
        ("mobilenet_v2_1.0_224", "bundled"),
        ("models/detector", "bundled"),
    ];

    for (identifier, expected) in cases {
        let source = ModelSource::classify(identifier).unwrap();
        assert_eq!(source.kind_name(), expected, "identifier {}", identifier);
    }
}

#[test]
fn test_classification_is_deterministic() {
    let identifier = "file:///data/user/0/app/files/model.tflite";
    assert_eq!(
        ModelSource::classify(identifier).unwrap(),
        ModelSource::classify(identifier).unwrap()
    );
}

#[test]
fn test_file_uri_with_localhost_authority() {
    assert_eq!(
        ModelSource::classify("file://localhost/tmp/model.tflite").unwrap(),
        ModelSource::File {
            path: PathBuf::from("/tmp/model.tflite")
        }
    );
}

#[test]
fn test_file_uri_without_path_is_invalid() {
    let err = ModelSource::classify("file://").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_file_uri_host_is_ignored() {
    assert_eq!(
        ModelSource::classify("file://fileserver/models/pose%20v2.tflite").unwrap(),
        ModelSource::File {
            path: PathBuf::from("/models/pose v2.tflite")
        }
    );
}
