/// Session token validation for publisher-service
///
/// Identity is owned by an external provider; this service only validates the
/// RS256-signed tokens it issues. RS256 only — no symmetric algorithms, so a
/// leaked validation key cannot be used to mint tokens, and no algorithm
/// confusion attacks. The public key is loaded once at startup and immutable
/// thereafter.
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::models::Role;

const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// Claims this service consumes from the identity provider's tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Account role asserted at session issuance
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Read the validation key PEM from the environment.
pub fn load_validation_key() -> Result<String> {
    std::env::var("JWT_PUBLIC_KEY_PEM").map_err(|_| anyhow!("JWT_PUBLIC_KEY_PEM not set"))
}

/// Install the RSA public key used to validate session tokens.
///
/// Must be called during startup before any request is served. Can only be
/// called once.
pub fn initialize_validation_key(public_key_pem: &str) -> Result<()> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| anyhow!("Invalid RSA public key: {}", e))?;

    JWT_DECODING_KEY
        .set(decoding_key)
        .map_err(|_| anyhow!("JWT validation key already initialized"))?;

    Ok(())
}

/// Validate a bearer token and return its claims.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = JWT_DECODING_KEY
        .get()
        .ok_or_else(|| anyhow!("JWT validation key not initialized"))?;

    let validation = Validation::new(JWT_ALGORITHM);

    decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {}", e))
}
