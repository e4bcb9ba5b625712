use super::*;

#[tokio::test]
async fn test_auth_commands_debug_format() {
    let cmd = AuthCommands::GitHub {
        method: "token".to_string(),
    };
    let debug_output = format!("{:?}", cmd);
    assert!(debug_output.contains("GitHub"));
    assert!(debug_output.contains("token"));
}

#[tokio::test]
async fn test_execute_github_invalid_method() {
    let cmd = AuthCommands::GitHub {
        method: "app".to_string(),
    };

    let result = execute(&cmd).await;

    assert!(matches!(result, Err(Error::Auth(_))));
}

#[test]
fn test_keyring_constants() {
    assert_eq!(KEY_RING_SERVICE_NAME, "repo_reaper_cli");
    assert_eq!(KEY_RING_USER_TOKEN, "github_token");
    assert_eq!(GITHUB_TOKEN_ENV, "GITHUB_TOKEN");
}

#[test]
fn test_select_token_prefers_environment() {
    let ask = |_: &str| -> Result<String, Error> { panic!("should not prompt") };

    let token = select_token(
        Some("env-token".to_string()),
        Some("stored-token".to_string()),
        &ask,
    )
    .unwrap();

    assert_eq!(token, "env-token");
}

#[test]
fn test_select_token_falls_back_to_keyring() {
    let ask = |_: &str| -> Result<String, Error> { panic!("should not prompt") };

    let token = select_token(None, Some("stored-token".to_string()), &ask).unwrap();

    assert_eq!(token, "stored-token");
}

#[test]
fn test_select_token_prompts_as_last_resort() {
    let ask = |_: &str| -> Result<String, Error> { Ok("typed-token".to_string()) };

    let token = select_token(None, None, &ask).unwrap();

    assert_eq!(token, "typed-token");
}

#[test]
fn test_select_token_rejects_empty_prompt_response() {
    let ask = |_: &str| -> Result<String, Error> { Ok(String::new()) };

    let result = select_token(None, None, &ask);

    assert!(matches!(result, Err(Error::Auth(_))));
}
