use std::collections::HashSet;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::SessionClaims;
use crate::errors::AuthError;

use super::clock::ClockType;

/// Signs and verifies compact session tokens. Stateless apart from the key
/// material handed over at construction.
pub trait TokenCodec: Send + Sync {
    fn encode(&self, claims: &SessionClaims) -> Result<String, AuthError>;
    fn decode(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// HS256 JWT codec. Expiry is checked here against the injected clock with
/// an inclusive cutoff (`now >= exp` is expired), so the library's own
/// leeway-based exp validation stays disabled.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: ClockType,
}

impl JwtCodec {
    pub fn new(secret: &[u8], clock: ClockType) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }
}

impl TokenCodec for JwtCodec {
    fn encode(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(AuthError::Signing)
    }

    fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            })?;

        let claims = data.claims;
        if self.clock.now().timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}
