//! Bearer-assertion construction and signing.
//!
//! The platform hands out service-account credentials as a private RSA key
//! in JWK form. The key is rebuilt from its components and used to RS256-
//! sign a short-lived assertion whose issuer and subject are both the
//! service-account id.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use rand::Rng as _;
use rsa::pkcs1::EncodeRsaPrivateKey as _;
use rsa::{BigUint, RsaPrivateKey};
use serde::{Deserialize, Serialize};

use crate::error::{AuthflowError, Result};

/// Claims carried by a service-account bearer assertion.
#[derive(Debug, Clone, Serialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: i64,
    pub jti: String,
}

/// A signed bearer assertion together with the claims baked into it.
#[derive(Debug, Clone)]
pub struct SignedAssertion {
    pub jwt: String,
    pub claims: AssertionClaims,
}

/// Sign a bearer assertion expiring `exp_seconds` from now.
pub fn sign_assertion(
    service_account_id: &str,
    audience: &str,
    jwk_json: &str,
    exp_seconds: u64,
) -> Result<SignedAssertion> {
    sign_assertion_at(
        Utc::now().timestamp(),
        service_account_id,
        audience,
        jwk_json,
        exp_seconds,
    )
}

/// Sign a bearer assertion with an explicit clock.
///
/// Identical inputs at the same instant produce assertions that differ only
/// in their random `jti`.
pub fn sign_assertion_at(
    now: i64,
    service_account_id: &str,
    audience: &str,
    jwk_json: &str,
    exp_seconds: u64,
) -> Result<SignedAssertion> {
    let jwk: PrivateJwk = serde_json::from_str(jwk_json)
        .map_err(|err| AuthflowError::Signing(format!("invalid JWK JSON: {err}")))?;
    if !jwk.kty.eq_ignore_ascii_case("RSA") {
        return Err(AuthflowError::Signing(format!(
            "unsupported key type: {}",
            jwk.kty
        )));
    }
    let key = rsa_key_from_jwk(&jwk)?;
    let der = key
        .to_pkcs1_der()
        .map_err(|err| AuthflowError::Signing(format!("key encoding failed: {err}")))?;
    let encoding_key = EncodingKey::from_rsa_der(der.as_bytes());

    let mut jti_bytes = [0u8; 16];
    rand::rng().fill(&mut jti_bytes[..]);
    let claims = AssertionClaims {
        iss: service_account_id.to_string(),
        sub: service_account_id.to_string(),
        aud: audience.to_string(),
        exp: now + exp_seconds as i64,
        jti: URL_SAFE_NO_PAD.encode(jti_bytes),
    };

    let jwt = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(|err| AuthflowError::Signing(format!("assertion signing failed: {err}")))?;
    Ok(SignedAssertion { jwt, claims })
}

/// Private RSA key components as delivered in the JWK. `p` and `q` may be
/// absent; the key is then recovered from `n`, `e`, and `d` alone.
#[derive(Debug, Deserialize)]
struct PrivateJwk {
    kty: String,
    n: String,
    e: String,
    d: String,
    #[serde(default)]
    p: Option<String>,
    #[serde(default)]
    q: Option<String>,
}

fn rsa_key_from_jwk(jwk: &PrivateJwk) -> Result<RsaPrivateKey> {
    let n = decode_component(&jwk.n, "n")?;
    let e = decode_component(&jwk.e, "e")?;
    let d = decode_component(&jwk.d, "d")?;
    let mut primes = Vec::new();
    if let (Some(p), Some(q)) = (&jwk.p, &jwk.q) {
        primes.push(decode_component(p, "p")?);
        primes.push(decode_component(q, "q")?);
    }
    RsaPrivateKey::from_components(n, e, d, primes)
        .map_err(|err| AuthflowError::Signing(format!("inconsistent RSA key: {err}")))
}

fn decode_component(value: &str, field: &str) -> Result<BigUint> {
    let bytes = URL_SAFE_NO_PAD.decode(value).map_err(|err| {
        AuthflowError::Signing(format!("invalid base64url in JWK field {field}: {err}"))
    })?;
    Ok(BigUint::from_bytes_be(&bytes))
}
