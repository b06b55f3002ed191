/// Session token signing for marketplace services
///
/// A [`JwtSigner`] owns its encoding and decoding keys. Services build one at
/// startup from configuration and pass it to whoever needs to sign or verify,
/// so there is no global key storage to initialize.
///
/// ## Algorithms
///
/// - **HS256** via [`JwtSigner::from_secret`]: shared secret, used between the
///   api gateway and the services behind it
/// - **RS256** via [`JwtSigner::from_rsa_pem`]: asymmetric keys for deployments
///   where verifiers must not be able to sign
///
/// Session tokens carry no expiry. Clients obtain a fresh one through the
/// refresh-token endpoint.
///
/// ```rust
/// use crypto_core::jwt::JwtSigner;
/// use uuid::Uuid;
///
/// let signer = JwtSigner::from_secret("local-dev-secret");
/// let token = signer.sign(Uuid::new_v4(), "bob@example.com", "Bob").unwrap();
/// let claims = signer.verify_session(&token).unwrap();
/// assert_eq!(claims.username, "Bob");
/// ```
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use jsonwebtoken::Algorithm;

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    #[error("failed to sign token: {0}")]
    Signing(String),

    #[error("token validation failed: {0}")]
    Validation(String),
}

/// Claims of a user session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id (UUID string)
    pub id: String,
    pub email: String,
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtSigner {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSigner")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl JwtSigner {
    /// HS256 signer from a shared secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// RS256 signer from PEM-encoded RSA keys
    pub fn from_rsa_pem(private_key_pem: &str, public_key_pem: &str) -> Result<Self, SignerError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| SignerError::InvalidKey(format!("RSA private key: {e}")))?;
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| SignerError::InvalidKey(format!("RSA public key: {e}")))?;

        Ok(Self {
            algorithm: Algorithm::RS256,
            encoding_key,
            decoding_key,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign a session token for a user
    pub fn sign(&self, user_id: Uuid, email: &str, username: &str) -> Result<String, SignerError> {
        let claims = SessionClaims {
            id: user_id.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            iat: Utc::now().timestamp(),
        };

        self.sign_claims(&claims)
    }

    /// Sign arbitrary claims with this signer's key
    pub fn sign_claims<C: Serialize>(&self, claims: &C) -> Result<String, SignerError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| SignerError::Signing(e.to_string()))
    }

    /// Verify the signature and decode claims.
    ///
    /// Only the algorithm this signer was built with is accepted. `exp` is
    /// checked when present but not required.
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, SignerError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        decode::<C>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| SignerError::Validation(e.to_string()))
    }

    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, SignerError> {
        self.verify(token)
    }
}
