use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};
use time::OffsetDateTime;

/// Account role. Stored as lowercase text; nothing in the service enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Guest,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,        // stored exactly as submitted
    pub email: String,
    pub role: Role,
    pub profile: Option<String>, // rendered verbatim on /profile
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Fields accepted by the credential store on insert.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: &'a str,
    pub role: Role,
    pub profile: Option<&'a str>,
}

/// The columns a login needs, read without type checks.
///
/// Whatever the interpolated login query returns is taken at face value:
/// text in the id column reads as SQLite's integer conversion of it, and
/// any role string (or none) is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRow {
    pub id: i64,
    pub username: String,
    pub role: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for LoginRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get_unchecked::<Option<i64>, _>("id")?.unwrap_or_default(),
            username: row
                .try_get_unchecked::<Option<String>, _>("username")?
                .unwrap_or_default(),
            role: row.try_get_unchecked::<Option<String>, _>("role")?,
        })
    }
}
