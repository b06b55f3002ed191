use crate::error::{AuthError, AuthResult};
use crate::models::{AuthDocument, NewAuthUser};
use async_trait::async_trait;
use sqlx::PgPool;

/// Message returned when a username or email is already taken
pub const DUPLICATE_CREDENTIALS: &str = "Invalid credentials. Email or Username";

/// Persistence of auth users. Inputs are expected to be normalized already.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<AuthDocument>>;

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AuthResult<Option<AuthDocument>>;

    /// Insert a user whose password has already been hashed
    async fn insert(&self, user: &NewAuthUser, password_hash: &str) -> AuthResult<AuthDocument>;
}

#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthRepository for PgAuthRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<AuthDocument>> {
        let user = sqlx::query_as::<_, AuthDocument>(
            r#"
            SELECT * FROM auths WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AuthResult<Option<AuthDocument>> {
        let user = sqlx::query_as::<_, AuthDocument>(
            r#"
            SELECT * FROM auths WHERE username = $1 OR email = $2
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: &NewAuthUser, password_hash: &str) -> AuthResult<AuthDocument> {
        sqlx::query_as::<_, AuthDocument>(
            r#"
            INSERT INTO auths (
                id, username, password, email, country, profile_picture,
                profile_public_id, email_verification_token, email_verified, created_at
            )
            VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7, false, CURRENT_TIMESTAMP)
            RETURNING *
            "#,
        )
        .bind(&user.username)
        .bind(password_hash)
        .bind(&user.email)
        .bind(&user.country)
        .bind(&user.profile_picture)
        .bind(&user.profile_public_id)
        .bind(&user.email_verification_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .map_or(false, |db_err| db_err.is_unique_violation());
            if duplicate {
                AuthError::bad_request(DUPLICATE_CREDENTIALS, "SignUp create() method error")
            } else {
                AuthError::from(e)
            }
        })
    }
}
