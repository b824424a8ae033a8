//! Repository for the `users` table.

use kompass_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{NewUser, PublicUser, UpdateUser, User};

/// Column list for users queries, including the password hash. Handlers
/// convert to [`PublicUser`] before responding.
const COLUMNS: &str = "\
    id, email, username, password_hash, role, admin, participant_id, \
    created_at";

/// Column list without the password hash, for listings.
const PUBLIC_COLUMNS: &str = "id, email, username, role, admin, participant_id, created_at";

/// Provides account operations.
pub struct UserRepo;

impl UserRepo {
    /// Create an account. Duplicate email or username surfaces as a unique
    /// violation on a `uq_` constraint.
    pub async fn create(pool: &PgPool, input: &NewUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, username, password_hash, role, participant_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(input.participant_id)
            .fetch_one(pool)
            .await
    }

    /// Find an account by email, for login.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all accounts without password hashes.
    pub async fn list(pool: &PgPool) -> Result<Vec<PublicUser>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users ORDER BY created_at ASC");
        sqlx::query_as::<_, PublicUser>(&query).fetch_all(pool).await
    }

    /// Update an account. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                username = COALESCE($3, username),
                role = COALESCE($4, role),
                admin = COALESCE($5, admin)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.role)
            .bind(input.admin)
            .fetch_optional(pool)
            .await
    }

    /// Delete an account. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
