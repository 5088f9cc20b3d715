use trackpop::{management::TokenManager, types::Error};

// Single test function: credential lookups read the process environment, so
// both missing-credential scenarios run sequentially here. This file must not
// share a process with tests that set CLIENT_ID/CLIENT_SECRET.
#[tokio::test]
async fn test_bootstrap_fails_without_credentials() {
    unsafe {
        std::env::remove_var("CLIENT_ID");
        std::env::remove_var("CLIENT_SECRET");
        // Unroutable token endpoint: if bootstrap attempted a request before
        // checking credentials, the error would be RemoteService instead.
        std::env::set_var("SPOTIFY_API_TOKEN_URL", "http://127.0.0.1:1/token");
    }

    let err = TokenManager::bootstrap()
        .await
        .expect_err("bootstrap must fail without CLIENT_ID");
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("CLIENT_ID"));

    // With only the secret missing the error names the secret
    unsafe {
        std::env::set_var("CLIENT_ID", "test-client-id");
    }

    let err = TokenManager::bootstrap()
        .await
        .expect_err("bootstrap must fail without CLIENT_SECRET");
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("CLIENT_SECRET"));
}
