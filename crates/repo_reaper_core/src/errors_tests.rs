use super::*;
use std::error::Error as StdError;

#[test]
fn test_selection_error_empty_message() {
    let error = SelectionError::Empty;

    assert_eq!(error.to_string(), "Selection is empty");
    assert!(error.source().is_none());
}

#[test]
fn test_selection_error_malformed_names_token() {
    let error = SelectionError::Malformed {
        token: "abc".to_string(),
    };

    assert_eq!(error.to_string(), "Malformed selection token 'abc'");
}

#[test]
fn test_selection_error_invalid_range_names_token() {
    let error = SelectionError::InvalidRange {
        token: "5-3".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Invalid range '5-3': start is greater than end"
    );
}

#[test]
fn test_selection_error_out_of_range_names_index_and_bound() {
    let error = SelectionError::OutOfRange {
        index: 11,
        bound: 10,
    };

    assert_eq!(
        error.to_string(),
        "Index 11 is out of range, valid indices are 1 to 10"
    );
}

#[test]
fn test_directory_error_messages() {
    assert_eq!(
        DirectoryError::Auth("Bad credentials".to_string()).to_string(),
        "Authentication failed: Bad credentials"
    );
    assert_eq!(
        DirectoryError::PermissionDenied.to_string(),
        "Permission denied"
    );
    assert_eq!(DirectoryError::NotFound.to_string(), "Repository not found");
    assert_eq!(
        DirectoryError::Transport("connection reset".to_string()).to_string(),
        "Transport error: connection reset"
    );
}

#[test]
fn test_directory_error_from_client_auth_error() {
    let error = DirectoryError::from(github_client::Error::AuthError(
        "Bad credentials".to_string(),
    ));

    assert_eq!(error, DirectoryError::Auth("Bad credentials".to_string()));
}

#[test]
fn test_directory_error_from_client_permission_denied() {
    let error = DirectoryError::from(github_client::Error::PermissionDenied);

    assert_eq!(error, DirectoryError::PermissionDenied);
}

#[test]
fn test_directory_error_from_client_not_found() {
    let error = DirectoryError::from(github_client::Error::NotFound);

    assert_eq!(error, DirectoryError::NotFound);
}

#[test]
fn test_directory_error_from_client_other_is_transport() {
    let error = DirectoryError::from(github_client::Error::RateLimitExceeded);

    assert!(matches!(error, DirectoryError::Transport(_)));
}

#[test]
fn test_errors_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SelectionError>();
    assert_send_sync::<DirectoryError>();
}
