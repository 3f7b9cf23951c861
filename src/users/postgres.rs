use crate::users::{Role, StoreError, User, UserStore};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Postgres-backed account store. The `users` table carries a UNIQUE
/// constraint on `email`, see `sql/schema.sql`.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query =
            "SELECT id, email, name, password_hash, role, created_at FROM users WHERE email = $1";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        row.map(row_to_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        let query = r"
            INSERT INTO users (id, email, name, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET email = EXCLUDED.email,
                name = EXCLUDED.name,
                password_hash = EXCLUDED.password_hash
            RETURNING id, email, name, password_hash, role, created_at
        ";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .instrument(span)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateEmail
                } else {
                    StoreError::Backend(e.to_string())
                }
            })?;

        row_to_user(row)
    }
}

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, StoreError> {
    let role: String = row.get("role");
    let role: Role = role.parse().map_err(StoreError::Backend)?;

    Ok(User {
        id: row.get::<Uuid, _>("id"),
        email: row.get("email"),
        name: row.get("name"),
        password_hash: row.get("password_hash"),
        role,
        created_at: row.get::<OffsetDateTime, _>("created_at"),
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
