use anyhow::Result;
use http::header::AUTHORIZATION;
use log::debug;
use oauthsign_oauth1::{Consumer, SignableRequest, Token};
use pretty_assertions::assert_eq;

use super::{form_request, init_signing_test, pinned_service};

const CONSUMER_KEY: &str = "xvz1evFS4wEEPTGEFPHBog";
const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";
const TOKEN: &str = "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb";
const TOKEN_SECRET: &str = "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE";
const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
const TIMESTAMP: i64 = 1318622958;

fn update_status_request() -> Result<SignableRequest> {
    Ok(SignableRequest::new(form_request(
        "https://api.twitter.com/1/statuses/update.json?include_entities=true",
        "status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
    ))?)
}

#[test]
fn test_update_status_with_token() -> Result<()> {
    init_signing_test();

    let req = update_status_request()?;
    let signed = pinned_service(NONCE, TIMESTAMP).authorize_request(
        &req,
        &Consumer::new(CONSUMER_KEY, CONSUMER_SECRET),
        Some(&Token::new(TOKEN, TOKEN_SECRET)),
    )?;

    assert_eq!(
        signed.oauth_get("oauth_signature"),
        Some("tnnArxj06cWHq44gCs1OSKk/jLY=")
    );
    assert_eq!(signed.oauth_get("oauth_token"), Some(TOKEN));

    let authorized = signed
        .authorized_request()
        .expect("signed request must be authorized");
    debug!("signed request: {authorized:?}");

    assert_eq!(
        authorized.headers()[AUTHORIZATION].to_str()?,
        "OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", \
         oauth_nonce=\"kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\", \
         oauth_signature=\"tnnArxj06cWHq44gCs1OSKk%2FjLY%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1318622958\", \
         oauth_token=\"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\", \
         oauth_version=\"1.0\""
    );
    assert_eq!(authorized.body(), req.original_request().body());
    Ok(())
}

#[test]
fn test_request_token_with_callback_in_body() -> Result<()> {
    init_signing_test();

    let req = SignableRequest::new(form_request(
        "https://api.twitter.com/oauth/request_token",
        "oauth_callback=http%3A%2F%2Flocalhost%2Fsign-in-with-twitter%2F",
    ))?;
    let signed = pinned_service("ea9ec8429b68d6b77cd5600adbbb0456", 1318467427)
        .authorize_request(
            &req,
            &Consumer::new(
                "cChZNFj6T5R0TigYB9yd1w",
                "L8qq9PZyRg6ieKGEKhZolGC0vJWLw8iEJ88DRdyOg",
            ),
            None,
        )?;

    assert_eq!(
        signed.oauth_get("oauth_signature"),
        Some("F1Li3tvehgcraF8DMJ7OyxO4w9Y=")
    );
    assert_eq!(signed.oauth_get("oauth_token"), None);
    Ok(())
}

#[test]
fn test_request_token_with_callback_as_protocol_parameter() -> Result<()> {
    init_signing_test();

    let req = http::Request::post("https://api.twitter.com/oauth/request_token")
        .body(bytes::Bytes::new())?;
    let mut req = SignableRequest::new(req)?;
    req.oauth_set("oauth_callback", "http://localhost/sign-in-with-twitter/");

    let signed = pinned_service("ea9ec8429b68d6b77cd5600adbbb0456", 1318467427)
        .authorize_request(
            &req,
            &Consumer::new(
                "cChZNFj6T5R0TigYB9yd1w",
                "L8qq9PZyRg6ieKGEKhZolGC0vJWLw8iEJ88DRdyOg",
            ),
            None,
        )?;

    assert_eq!(
        signed.oauth_get("oauth_signature"),
        Some("F1Li3tvehgcraF8DMJ7OyxO4w9Y=")
    );

    let header = signed
        .authorized_request()
        .expect("signed request must be authorized")
        .headers()[AUTHORIZATION]
        .to_str()?
        .to_string();
    assert!(header.starts_with(
        "OAuth oauth_callback=\"http%3A%2F%2Flocalhost%2Fsign-in-with-twitter%2F\", "
    ));
    Ok(())
}

#[test]
fn test_nonce_and_timestamp_change_signature() -> Result<()> {
    init_signing_test();

    let req = update_status_request()?;
    let consumer = Consumer::new(CONSUMER_KEY, CONSUMER_SECRET);
    let token = Token::new(TOKEN, TOKEN_SECRET);

    let sign = |nonce: &str, timestamp: i64| -> Result<String> {
        let signed =
            pinned_service(nonce, timestamp).authorize_request(&req, &consumer, Some(&token))?;
        Ok(signed
            .oauth_get("oauth_signature")
            .expect("signature must be set")
            .to_string())
    };

    let base = sign(NONCE, TIMESTAMP)?;
    assert_eq!(base, sign(NONCE, TIMESTAMP)?);
    assert_ne!(base, sign("another-nonce", TIMESTAMP)?);
    assert_ne!(base, sign(NONCE, TIMESTAMP + 1)?);
    Ok(())
}
