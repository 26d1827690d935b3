use std::io;

use christen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError("bad import name".to_string());
    assert_eq!(err.to_string(), "Validation error: bad import name.");

    let err = Error::MetadataError("missing section [project]".to_string());
    assert_eq!(err.to_string(), "Metadata error: missing section [project].");

    let err = Error::CommandError {
        command: "uv lock".to_string(),
        status: "exit status: 2".to_string(),
    };
    assert_eq!(err.to_string(), "command `uv lock` failed: exit status: 2.");
}

#[test]
fn test_path_io_error_names_the_path() {
    let err = Error::PathIoError {
        path: "src/py_template/core.py".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("src/py_template/core.py"));
}
