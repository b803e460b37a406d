use std::collections::HashMap;

use anyhow::Result;
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::Request;
use oauthsign_core::{Context, ProvideCredential, Signer, StaticEnv};
use oauthsign_oauth1::{DefaultCredentialProvider, EnvCredentialProvider, Service, Token};

fn env_context(envs: &[(&str, &str)]) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_env(StaticEnv {
        envs: envs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    })
}

#[tokio::test]
async fn test_env_provider_loads_token() -> Result<()> {
    let ctx = env_context(&[
        ("OAUTH1_CONSUMER_KEY", "ck"),
        ("OAUTH1_CONSUMER_SECRET", "cs"),
        ("OAUTH1_TOKEN", "tv"),
        ("OAUTH1_TOKEN_SECRET", "ts"),
    ]);

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await?
        .expect("credential must be loaded");
    assert_eq!(cred.consumer.key, "ck");
    assert_eq!(cred.token, Some(Token::new("tv", "ts")));
    Ok(())
}

#[tokio::test]
async fn test_env_provider_without_env() -> Result<()> {
    let ctx = env_context(&[]);

    let cred = DefaultCredentialProvider::new()
        .provide_credential(&ctx)
        .await?;
    assert!(cred.is_none());
    Ok(())
}

#[tokio::test]
async fn test_signer_with_env_provider() -> Result<()> {
    let ctx = env_context(&[
        ("OAUTH1_CONSUMER_KEY", "ck"),
        ("OAUTH1_CONSUMER_SECRET", "cs"),
    ]);
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), Service::new());

    let req = Request::get("https://example.com/resource").body(Bytes::new())?;
    let signed = signer.sign(&req).await?;

    let header = signed.headers()[AUTHORIZATION].to_str()?;
    assert!(header.starts_with("OAuth oauth_consumer_key=\"ck\", oauth_nonce=\""));
    assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
    assert!(!header.contains("oauth_token="));
    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential() -> Result<()> {
    let signer = Signer::new(
        env_context(&[]),
        DefaultCredentialProvider::new(),
        Service::new(),
    );

    let req = Request::get("https://example.com/resource").body(Bytes::new())?;
    assert!(signer.sign(&req).await.is_err());
    Ok(())
}
