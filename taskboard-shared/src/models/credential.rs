/// Identity store credential model
///
/// Maps a username to its Argon2id password hash. This table is the identity
/// store: authentication resolves a presented username/password pair against
/// it, while the application user record (see [`crate::models::user`]) holds
/// no password material at all.
///
/// Invariant: a credential row and a users row are created together in one
/// transaction and share `username`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE credentials (
///     username VARCHAR(150) PRIMARY KEY,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

/// Credential record in the identity store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Credential {
    /// Username, matches the application users row
    pub username: String,

    /// Argon2id password hash (PHC string format), never plaintext
    pub password_hash: String,

    /// When the credential was created
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Creates a new credential row
    ///
    /// Takes any Postgres executor so the caller can run it inside the same
    /// transaction as the application user write.
    ///
    /// # Errors
    ///
    /// Returns an error if the username already has a credential or the
    /// database is unreachable.
    pub async fn create<'e, E>(
        executor: E,
        username: &str,
        password_hash: &str,
    ) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let credential = sqlx::query_as::<_, Credential>(
            r#"
            INSERT INTO credentials (username, password_hash)
            VALUES ($1, $2)
            RETURNING username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(executor)
        .await?;

        Ok(credential)
    }

    /// Finds a credential by username
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let credential = sqlx::query_as::<_, Credential>(
            r#"
            SELECT username, password_hash, created_at
            FROM credentials
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_struct() {
        let credential = Credential {
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$m=65536,t=3,p=4$salt$hash".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(credential.username, "alice");
        assert!(credential.password_hash.starts_with("$argon2id$"));
    }
}
