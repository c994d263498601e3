use thiserror::Error;
use tracing::{debug, info};

use crate::db::Database;
use crate::users::repo_types::{NewUser, Role, User};

pub(crate) const USER_COLUMNS: &str = "id, username, password, email, role, profile, created_at";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists")]
    AlreadyExists,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Accounts present in every fresh database.
pub const DEMO_USERS: [NewUser<'static>; 4] = [
    NewUser {
        username: "admin",
        password: "admin123",
        email: "admin@vulnapp.com",
        role: Role::Admin,
        profile: Some(r#"<script>alert("XSS")</script>Admin User"#),
    },
    NewUser {
        username: "user1",
        password: "password",
        email: "user1@vulnapp.com",
        role: Role::User,
        profile: Some("Regular user account"),
    },
    NewUser {
        username: "test",
        password: "test123",
        email: "test@vulnapp.com",
        role: Role::User,
        profile: Some("Test user for demonstrations"),
    },
    NewUser {
        username: "guest",
        password: "guest",
        email: "guest@vulnapp.com",
        role: Role::Guest,
        profile: Some("Guest user account"),
    },
];

impl User {
    /// Insert a user. Username uniqueness is left to the table constraint.
    pub async fn insert(db: &Database, new: &NewUser<'_>) -> Result<i64, StoreError> {
        let mut conn = db.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password, email, role, profile)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.username)
        .bind(new.password)
        .bind(new.email)
        .bind(new.role.as_str())
        .bind(new.profile)
        .execute(&mut conn)
        .await;
        Database::release(conn).await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &Database, id: i64) -> Result<Option<User>, sqlx::Error> {
        let mut conn = db.acquire().await?;
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        Database::release(conn).await;
        user
    }

    /// Every user ordered by id, regardless of who is asking.
    pub async fn list_all(db: &Database) -> Result<Vec<User>, sqlx::Error> {
        let mut conn = db.acquire().await?;
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let users = sqlx::query_as::<_, User>(&sql).fetch_all(&mut conn).await;
        Database::release(conn).await;
        users
    }

    /// Insert the demo accounts, skipping any that already exist.
    pub async fn seed_demo_users(db: &Database) -> Result<(), sqlx::Error> {
        for demo in &DEMO_USERS {
            match User::insert(db, demo).await {
                Ok(id) => info!(user_id = id, username = demo.username, "seeded demo user"),
                Err(StoreError::AlreadyExists) => {
                    debug!(username = demo.username, "demo user already present");
                }
                Err(StoreError::Database(e)) => return Err(e),
            }
        }
        Ok(())
    }
}
