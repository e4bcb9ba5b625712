use super::*;

#[test]
fn test_auth_error_message() {
    let error = Error::Auth("token rejected".to_string());

    assert_eq!(error.to_string(), "Authentication error: token rejected");
}

#[test]
fn test_config_error_message() {
    let error = Error::Config("file not found".to_string());

    assert_eq!(error.to_string(), "Configuration error: file not found");
}

#[test]
fn test_directory_error_is_wrapped() {
    let error = Error::from(DirectoryError::NotFound);

    assert_eq!(
        error.to_string(),
        "Repository directory error: Repository not found"
    );
}

#[test]
fn test_read_input_error_message() {
    let error = Error::ReadInput(io::Error::other("stream closed"));

    assert_eq!(error.to_string(), "Failed to read user input.");
}

#[test]
fn test_std_out_flush_error_message() {
    let error = Error::StdOutFlushFailed;

    assert_eq!(error.to_string(), "Failed to flush the std out buffer.");
}
