use kobuild_util::errors::KobuildError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = KobuildError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = KobuildError::Config {
        message: "unknown source set".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: unknown source set");
}

#[test]
fn test_generic_error_display() {
    let err = KobuildError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let kobuild_err: KobuildError = io_err.into();
    assert!(matches!(kobuild_err, KobuildError::Io(_)));
}
