//! Credential and profile lookups.
//!
//! `find_by_credentials_interpolated` splices caller input straight into the
//! SQL text, so quote characters in either field rewrite the WHERE clause.
//! The `_bound` operations pass the same input as parameters instead.

use tracing::debug;

use crate::db::Database;
use crate::users::repo::USER_COLUMNS;
use crate::users::repo_types::{LoginRow, User};

/// Login query text with username and password pasted in as-is.
pub fn interpolated_login_query(username: &str, password: &str) -> String {
    format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = '{username}' AND password = '{password}'"
    )
}

/// Credential check used by `/login`. The first row returned, genuine or
/// injected, is the match. Any failure, including malformed SQL produced by
/// the input, comes back untouched.
pub async fn find_by_credentials_interpolated(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<Option<LoginRow>, sqlx::Error> {
    let sql = interpolated_login_query(username, password);
    debug!(query = %sql, "interpolated login lookup");
    let mut conn = db.acquire().await?;
    let user = sqlx::query_as::<_, LoginRow>(&sql)
        .fetch_optional(&mut conn)
        .await;
    Database::release(conn).await;
    user
}

/// Same credential check with both fields bound as parameters.
pub async fn find_by_credentials_bound(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ? AND password = ?");
    let mut conn = db.acquire().await?;
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(username)
        .bind(password)
        .fetch_optional(&mut conn)
        .await;
    Database::release(conn).await;
    user
}

/// Replace the profile text of a user. Returns the number of rows touched.
pub async fn update_profile_bound(
    db: &Database,
    user_id: i64,
    profile: &str,
) -> Result<u64, sqlx::Error> {
    let mut conn = db.acquire().await?;
    let result = sqlx::query("UPDATE users SET profile = ? WHERE id = ?")
        .bind(profile)
        .bind(user_id)
        .execute(&mut conn)
        .await;
    Database::release(conn).await;
    Ok(result?.rows_affected())
}
