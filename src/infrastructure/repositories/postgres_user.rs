// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, Role, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    subject: String,
    username: String,
    email: Option<String>,
    role: String,
    created_on: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            subject: row.subject,
            username: Username::new(row.username)?,
            email: row.email,
            role: row.role.parse::<Role>()?,
            created_on: row.created_on,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, subject, username, email, role, created_on FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_subject(&self, subject: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, subject, username, email, role, created_on FROM users WHERE subject = $1",
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn upsert(&self, user: NewUser) -> DomainResult<User> {
        let NewUser {
            id,
            subject,
            username,
            email,
            role,
            created_on,
        } = user;

        // created_on is only written on first insert.
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, subject, username, email, role, created_on)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE
                SET subject = EXCLUDED.subject,
                    username = EXCLUDED.username,
                    email = EXCLUDED.email,
                    role = EXCLUDED.role
             RETURNING id, subject, username, email, role, created_on",
        )
        .bind(i64::from(id))
        .bind(&subject)
        .bind(username.as_str())
        .bind(&email)
        .bind(role.as_str())
        .bind(created_on)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }
}
