//! Quote repository implementation
//!
//! Row-level access to the `quotes` table. Queries are checked at runtime so
//! the crate builds without a live database.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

const QUOTE_COLUMNS: &str = "id, quote_id, base_fee, currency, policy_term, effective_date, \
     prev_policy_cancelled, owns_insure_property, property_zip, property_state, created_at";

/// Database row for a stored quote
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct QuoteRow {
    pub id: Uuid,
    pub quote_id: String,
    pub base_fee: Decimal,
    pub currency: String,
    pub policy_term: i32,
    pub effective_date: NaiveDate,
    pub prev_policy_cancelled: bool,
    pub owns_insure_property: bool,
    pub property_zip: String,
    pub property_state: String,
    pub created_at: DateTime<Utc>,
}

/// Values for inserting a quote
#[derive(Debug, Clone)]
pub struct NewQuoteRow {
    pub id: Uuid,
    pub quote_id: String,
    pub base_fee: Decimal,
    pub currency: String,
    pub policy_term: i32,
    pub effective_date: NaiveDate,
    pub prev_policy_cancelled: bool,
    pub owns_insure_property: bool,
    pub property_zip: String,
    pub property_state: String,
}

/// Repository for the `quotes` table
#[derive(Debug, Clone)]
pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a quote and returns the stored row
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the quote number is taken.
    pub async fn insert(&self, quote: NewQuoteRow) -> Result<QuoteRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO quotes (id, quote_id, base_fee, currency, policy_term, effective_date, \
             prev_policy_cancelled, owns_insure_property, property_zip, property_state) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {QUOTE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(quote.id)
            .bind(&quote.quote_id)
            .bind(quote.base_fee)
            .bind(&quote.currency)
            .bind(quote.policy_term)
            .bind(quote.effective_date)
            .bind(quote.prev_policy_cancelled)
            .bind(quote.owns_insure_property)
            .bind(&quote.property_zip)
            .bind(&quote.property_state)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn get(&self, id: Uuid) -> Result<QuoteRow, DatabaseError> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = $1");
        sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Quote", id))
    }

    pub async fn get_by_quote_id(&self, quote_id: &str) -> Result<QuoteRow, DatabaseError> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE quote_id = $1");
        sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(quote_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Quote", quote_id))
    }

    /// All quotes, oldest first
    pub async fn list(&self) -> Result<Vec<QuoteRow>, DatabaseError> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, QuoteRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Quote", id));
        }
        Ok(())
    }

    pub async fn quote_id_exists(&self, quote_id: &str) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM quotes WHERE quote_id = $1)",
        )
        .bind(quote_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Runs a trivial query to confirm the database answers
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
