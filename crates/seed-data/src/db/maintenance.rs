//! Schema maintenance: dropping every table in a schema.

use sqlx::MySqlConnection;
use tracing::info;

use super::SeedError;

/// Builds one `DROP TABLE IF EXISTS` statement per table.
pub fn drop_statements(tables: &[String]) -> Vec<String> {
    tables
        .iter()
        .map(|table| format!("DROP TABLE IF EXISTS `{table}`"))
        .collect()
}

/// Drops every table in `schema`.
///
/// Foreign-key checks are disabled before the drops and re-enabled after;
/// the drops would otherwise fail on inter-table constraints. Runs on a
/// dedicated connection because `FOREIGN_KEY_CHECKS` is session-scoped.
/// Returns the names of the dropped tables.
pub async fn drop_all_tables(
    conn: &mut MySqlConnection,
    schema: &str,
) -> Result<Vec<String>, SeedError> {
    info!("Dropping all tables in {schema}...");

    sqlx::query("SET FOREIGN_KEY_CHECKS = 0")
        .execute(&mut *conn)
        .await?;

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT table_name FROM information_schema.tables WHERE table_schema = ?",
    )
    .bind(schema)
    .fetch_all(&mut *conn)
    .await?;

    for statement in drop_statements(&tables) {
        sqlx::query(&statement).execute(&mut *conn).await?;
    }

    sqlx::query("SET FOREIGN_KEY_CHECKS = 1")
        .execute(&mut *conn)
        .await?;

    info!("Dropped {} tables", tables.len());
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_statement_per_table() {
        let tables: Vec<String> = ["users", "campaigns", "favorites"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        let statements = drop_statements(&tables);
        assert_eq!(statements.len(), tables.len());
        for (statement, table) in statements.iter().zip(&tables) {
            assert_eq!(statement, &format!("DROP TABLE IF EXISTS `{table}`"));
        }
    }

    #[test]
    fn test_empty_schema_yields_no_statements() {
        assert!(drop_statements(&[]).is_empty());
    }
}
