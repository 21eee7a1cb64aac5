use sqlx::SqlitePool;

const CREATE_ADDRESS_BOOK_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS address_book (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        phone TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    )
"#;

/// Creates the address book table when it does not exist yet. Safe to run on
/// every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ADDRESS_BOOK_TABLE).execute(pool).await?;
    Ok(())
}
