//! Structured fuzz target for token claim parsing and validation.
//!
//! Uses the `arbitrary` crate to generate structured token-like inputs,
//! assembles base64-encoded JWT strings from them, and feeds them through
//! the parsing pipeline. This reaches deeper code paths than raw byte
//! fuzzing because the inputs are valid-ish tokens with plausible structure.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use meridian_common_authn::token::{
    VerifierOptions, decode_token_claims, decode_token_header, validate_time_window,
};

/// Structured input representing a fuzzed token.
///
/// The fuzzer generates arbitrary values for each field, which are then
/// assembled into a three-part JWT string (header.payload.signature).
#[derive(Debug, Arbitrary)]
struct FuzzedToken {
    /// Algorithm string for the header
    alg: FuzzedAlg,
    /// Display name claim
    name: String,
    /// Username claim
    username: String,
    /// Role claim
    role: String,
    /// Issued-at timestamp
    iat: u64,
    /// Not-before timestamp (optionally omitted from the payload)
    nbf: Option<u64>,
    /// Expiration timestamp
    exp: u64,
    /// Arbitrary bytes for the signature segment
    signature_bytes: Vec<u8>,
    /// Whether to include a typ field in the header
    include_typ: bool,
}

/// Fuzzed algorithm values covering known attack vectors and edge cases.
#[derive(Debug, Arbitrary)]
enum FuzzedAlg {
    /// Standard EdDSA
    EdDSA,
    /// Algorithm substitution attack: "none"
    None,
    /// Symmetric algorithm attacks
    HS256,
    HS384,
    HS512,
    /// Asymmetric algorithms without verification support
    RS256,
    ES256,
    /// Arbitrary string
    Other(String),
}

impl FuzzedAlg {
    fn as_str(&self) -> &str {
        match self {
            Self::EdDSA => "EdDSA",
            Self::None => "none",
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::RS256 => "RS256",
            Self::ES256 => "ES256",
            Self::Other(s) => s,
        }
    }
}

/// Build a JWT string from the fuzzed input.
fn build_token(input: &FuzzedToken) -> String {
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    let mut header = serde_json::Map::new();
    header.insert("alg".to_string(), serde_json::Value::String(input.alg.as_str().to_string()));
    if input.include_typ {
        header.insert("typ".to_string(), serde_json::Value::String("JWT".to_string()));
    }

    let mut payload = serde_json::Map::new();
    payload.insert("name".to_string(), serde_json::Value::String(input.name.clone()));
    payload.insert("username".to_string(), serde_json::Value::String(input.username.clone()));
    payload.insert("role".to_string(), serde_json::Value::String(input.role.clone()));
    payload.insert(
        "iat".to_string(),
        serde_json::Value::Number(serde_json::Number::from(input.iat)),
    );
    if let Some(nbf) = input.nbf {
        payload.insert("nbf".to_string(), serde_json::Value::Number(serde_json::Number::from(nbf)));
    }
    payload.insert(
        "exp".to_string(),
        serde_json::Value::Number(serde_json::Number::from(input.exp)),
    );

    let header_json = serde_json::Value::Object(header);
    let payload_json = serde_json::Value::Object(payload);

    let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header_json).unwrap_or_default());
    let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload_json).unwrap_or_default());
    let sig_b64 = URL_SAFE_NO_PAD.encode(&input.signature_bytes);

    format!("{header_b64}.{payload_b64}.{sig_b64}")
}

fuzz_target!(|input: FuzzedToken| {
    let token = build_token(&input);

    // Fuzz decode_token_header: must not panic
    let header_result = decode_token_header(&token);

    // Fuzz decode_token_claims: must not panic
    let claims_result = decode_token_claims(&token);

    // If claims decoded, fuzz the time-window checks
    if let Ok(ref claims) = claims_result {
        let _ = validate_time_window(claims, &VerifierOptions::default());
        let _ = validate_time_window(
            claims,
            &VerifierOptions { leeway_secs: input.iat, validate_expiry: false },
        );
    }

    // Validate the algorithm when the header decoded
    if let Ok(ref header) = header_result {
        let alg_str = format!("{:?}", header.alg);
        let _ = meridian_common_authn::validate_algorithm(&alg_str);
    }
});
