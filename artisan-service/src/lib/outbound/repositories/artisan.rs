use async_trait::async_trait;
use auth::AccountLookup;
use auth::AccountRecord;
use auth::LookupError;
use sqlx::PgPool;
use uuid::Uuid;

/// Artisan credentials backed by the `artisans` table.
///
/// Emails are matched exactly as stored.
pub struct PostgresArtisanRepository {
    pool: PgPool,
}

impl PostgresArtisanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ArtisanRow {
    id: Uuid,
    email: String,
    password_hash: String,
}

impl From<ArtisanRow> for AccountRecord {
    fn from(row: ArtisanRow) -> Self {
        AccountRecord::new(row.id, row.email, row.password_hash)
    }
}

#[async_trait]
impl AccountLookup for PostgresArtisanRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, LookupError> {
        let row = sqlx::query_as::<_, ArtisanRow>(
            r#"
            SELECT id, email, password AS password_hash
            FROM artisans
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(lookup_error)?;

        Ok(row.map(AccountRecord::from))
    }
}

fn lookup_error(err: sqlx::Error) -> LookupError {
    match err {
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => LookupError::InvalidRecord(err.to_string()),
        _ => LookupError::Unavailable(err.to_string()),
    }
}
