use anyhow::Result;
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::Request;
use oauthsign_core::{Context, ErrorKind, SignRequest, Signer};
use oauthsign_oauth1::{
    percent_encode, Consumer, Credential, HeaderStrategy, Plaintext, QueryStrategy,
    SignableRequest, StaticCredentialProvider, Token,
};
use pretty_assertions::assert_eq;

use super::{form_request, init_signing_test, pinned_service};

#[test]
fn test_plaintext_signature() -> Result<()> {
    init_signing_test();

    let req = Request::get("https://photos.example.net/photos").body(Bytes::new())?;
    let req = SignableRequest::new(req)?;
    let signed = pinned_service("wIjqoS", 137131200)
        .with_signature_method(Plaintext)
        .authorize_request(
            &req,
            &Consumer::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44"),
            Some(&Token::new("hh5s93j4hdidpola", "hdhd0244k9j7ao03")),
        )?;

    let expected = format!(
        "{}&{}",
        percent_encode("kd94hf93k423kf44"),
        percent_encode("hdhd0244k9j7ao03")
    );
    assert_eq!(signed.oauth_get("oauth_signature"), Some(expected.as_str()));
    assert_eq!(signed.oauth_get("oauth_signature_method"), Some("PLAINTEXT"));
    Ok(())
}

#[test]
fn test_header_strategy_with_realm() -> Result<()> {
    init_signing_test();

    let req = Request::get("https://photos.example.net/photos?file=vacation.jpg")
        .body(Bytes::new())?;
    let req = SignableRequest::new(req)?;
    let consumer = Consumer::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44");

    let with_realm = pinned_service("chapoH", 137131202)
        .with_authorization_strategy(HeaderStrategy::new().with_realm("Photos"))
        .authorize_request(&req, &consumer, None)?;
    let without_realm =
        pinned_service("chapoH", 137131202).authorize_request(&req, &consumer, None)?;

    let header = with_realm
        .authorized_request()
        .expect("signed request must be authorized")
        .headers()[AUTHORIZATION]
        .to_str()?
        .to_string();
    assert!(header
        .starts_with("OAuth realm=\"Photos\", oauth_consumer_key=\"dpf43f3p2l4k3l03\""));

    // Realm is not signed.
    assert_eq!(
        with_realm.oauth_get("oauth_signature"),
        without_realm.oauth_get("oauth_signature")
    );
    Ok(())
}

#[test]
fn test_query_strategy() -> Result<()> {
    init_signing_test();

    let req = Request::get("https://photos.example.net/photos?size=original")
        .body(Bytes::new())?;
    let req = SignableRequest::new(req)?;
    let signed = pinned_service("chapoH", 137131202)
        .with_authorization_strategy(QueryStrategy::new())
        .authorize_request(
            &req,
            &Consumer::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44"),
            None,
        )?;

    let authorized = signed
        .authorized_request()
        .expect("signed request must be authorized");
    assert!(authorized.headers().get(AUTHORIZATION).is_none());

    let query = authorized.uri().query().unwrap_or_default();
    assert!(query.starts_with("size=original&oauth_consumer_key=dpf43f3p2l4k3l03&"));
    assert!(query.contains(&format!(
        "oauth_signature={}",
        percent_encode(signed.oauth_get("oauth_signature").unwrap_or_default())
    )));
    assert!(query.ends_with("oauth_version=1.0"));
    Ok(())
}

#[test]
fn test_malformed_body() -> Result<()> {
    init_signing_test();

    let req = SignableRequest::new(form_request("https://example.com/", "a=1&no_value"))?;
    let err = pinned_service("n", 1)
        .authorize_request(&req, &Consumer::new("ck", "cs"), None)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    Ok(())
}

#[tokio::test]
async fn test_signer_with_static_provider() -> Result<()> {
    init_signing_test();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new(
            "xvz1evFS4wEEPTGEFPHBog",
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        )
        .with_token(
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        ),
        pinned_service("kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", 1318622958),
    );

    let req = form_request(
        "https://api.twitter.com/1/statuses/update.json?include_entities=true",
        "status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
    );
    let signed = signer.sign(&req).await?;

    assert!(req.headers().get(AUTHORIZATION).is_none());
    assert!(signed.headers()[AUTHORIZATION]
        .to_str()?
        .contains("oauth_signature=\"tnnArxj06cWHq44gCs1OSKk%2FjLY%3D\""));
    Ok(())
}

#[tokio::test]
async fn test_sign_request_without_credential() -> Result<()> {
    init_signing_test();

    let req = Request::get("https://example.com/").body(Bytes::new())?;
    let err = pinned_service("n", 1)
        .sign_request(&Context::new(), &req, None::<&Credential>)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    Ok(())
}
