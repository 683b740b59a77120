//! Connectivity smoke-test queries.

use sqlx::MySqlConnection;

use super::SeedError;

/// Remediation steps printed when the server cannot be reached.
pub const CONNECTION_CHECKLIST: [&str; 5] = [
    "1. Check if MySQL is running on port 3306",
    "2. Verify the password is correct",
    "3. Check MySQL user permissions:",
    "   mysql -u root -p",
    "   SELECT user, host FROM mysql.user WHERE user='root';",
];

/// Results of the post-connection sanity queries.
#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub server_version: String,
    pub user_count: i64,
}

/// Runs the sanity queries on an already-open connection.
///
/// Connecting is the caller's job; a failure here means the server is
/// reachable but the schema or permissions are off, which the smoke test
/// reports differently from a connection failure.
pub async fn connection_report(conn: &mut MySqlConnection) -> Result<ConnectionReport, SeedError> {
    let server_version: String = sqlx::query_scalar("SELECT VERSION()")
        .fetch_one(&mut *conn)
        .await?;

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *conn)
        .await?;

    Ok(ConnectionReport {
        server_version,
        user_count,
    })
}
