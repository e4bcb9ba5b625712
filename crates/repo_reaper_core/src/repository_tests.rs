use super::*;

#[test]
fn test_record_accessors() {
    let record = RepositoryRecord::new("octocat", "hello-world", true);

    assert_eq!(record.owner(), "octocat");
    assert_eq!(record.name(), "hello-world");
    assert!(record.is_private());
}

#[test]
fn test_record_full_name() {
    let record = RepositoryRecord::new("octocat", "hello-world", false);

    assert_eq!(record.full_name(), "octocat/hello-world");
    assert_eq!(record.to_string(), "octocat/hello-world");
}

#[test]
fn test_record_from_client_repository() {
    let repository =
        github_client::Repository::new("hello-world".to_string(), "octocat".to_string(), true);

    let record = RepositoryRecord::from(repository);

    assert_eq!(record.owner(), "octocat");
    assert_eq!(record.name(), "hello-world");
    assert!(record.is_private());
}
