use std::io;
use std::path::PathBuf;

use apractool::error::Error;
use apractool::stubs::Extension;

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
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::InvalidNameError { name: "a-b".to_string() };
    assert_eq!(err.to_string(), "Template name 'a-b' has an invalid format.");

    let err = Error::AlreadyExistsError { file_name: "Foo.js".to_string() };
    assert_eq!(err.to_string(), "Foo.js already exists.");
}

#[test]
fn test_io_backed_errors_show_the_underlying_message() {
    let err = Error::StubReadError {
        extension: Extension::Js,
        source: io::Error::new(io::ErrorKind::NotFound, "no such stub"),
    };
    assert_eq!(err.to_string(), "no such stub");

    let err = Error::WriteError {
        path: PathBuf::from("/readonly/Foo.js"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };
    assert_eq!(err.to_string(), "permission denied");
}
