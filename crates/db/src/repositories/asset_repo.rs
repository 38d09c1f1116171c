//! Repository for the `assets` table.
//!
//! Drafts are validated before any statement runs, so a rejected draft
//! never mutates the store. Every mutation is a single statement and
//! commits atomically.

use chrono::{Local, NaiveDate, Utc};
use demirbas_core::record::{validate_draft, AssetDraft};
use demirbas_core::types::DbId;

use crate::error::StoreError;
use crate::models::Asset;
use crate::DbPool;

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, computer_name, brand, cpu, ram, storage, \
    consumables, serial_number, asset_tag, custodian_name, \
    custody_date, created_at";

/// Provides CRUD and substring search for asset custody records.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset record.
    ///
    /// Assigns the next id, stamps `created_at`, and defaults the
    /// custody date to today when the draft leaves it unset. Returns
    /// the stored row; ids strictly increase across successive calls.
    pub async fn create(pool: &DbPool, draft: &AssetDraft) -> Result<Asset, StoreError> {
        validate_draft(draft)?;
        let custody_date = resolve_custody_date(draft);

        let query = format!(
            "INSERT INTO assets (\
                computer_name, brand, cpu, ram, storage, \
                consumables, serial_number, asset_tag, custodian_name, \
                custody_date, created_at\
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
             RETURNING {ASSET_COLUMNS}"
        );
        let asset = sqlx::query_as::<_, Asset>(&query)
            .bind(draft.computer_name.trim())
            .bind(draft.brand.trim())
            .bind(draft.cpu.trim())
            .bind(draft.ram.trim())
            .bind(draft.storage.trim())
            .bind(draft.consumables.trim())
            .bind(draft.serial_number.trim())
            .bind(draft.asset_tag.trim())
            .bind(draft.custodian_name.trim())
            .bind(custody_date)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;

        tracing::debug!(id = asset.id, asset_tag = %asset.asset_tag, "created asset record");
        Ok(asset)
    }

    /// List every record, most recently created first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Asset>, StoreError> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets ORDER BY id DESC");
        Ok(sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await?)
    }

    /// Find a record by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Asset>, StoreError> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = ?1");
        Ok(sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Overwrite every mutable field of an existing record.
    ///
    /// `id` and `created_at` are preserved. Returns `Ok(None)` when no
    /// record carries the id; nothing is written in that case.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        draft: &AssetDraft,
    ) -> Result<Option<Asset>, StoreError> {
        validate_draft(draft)?;
        let custody_date = resolve_custody_date(draft);

        let query = format!(
            "UPDATE assets SET \
                computer_name = ?2, brand = ?3, cpu = ?4, ram = ?5, storage = ?6, \
                consumables = ?7, serial_number = ?8, asset_tag = ?9, \
                custodian_name = ?10, custody_date = ?11 \
             WHERE id = ?1 \
             RETURNING {ASSET_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(draft.computer_name.trim())
            .bind(draft.brand.trim())
            .bind(draft.cpu.trim())
            .bind(draft.ram.trim())
            .bind(draft.storage.trim())
            .bind(draft.consumables.trim())
            .bind(draft.serial_number.trim())
            .bind(draft.asset_tag.trim())
            .bind(draft.custodian_name.trim())
            .bind(custody_date)
            .fetch_optional(pool)
            .await?)
    }

    /// Delete a record by id. Returns true if a row was removed;
    /// deleting a missing id is not an error.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM assets WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        let removed = result.rows_affected() > 0;
        if removed {
            tracing::debug!(id, "deleted asset record");
        }
        Ok(removed)
    }

    /// Case-insensitive substring search across all ten text-bearing
    /// fields (the custody date matches as `YYYY-MM-DD` text).
    ///
    /// An empty or whitespace-only term lists everything. Results come
    /// back most recently created first.
    pub async fn search(pool: &DbPool, term: &str) -> Result<Vec<Asset>, StoreError> {
        let term = term.trim();
        if term.is_empty() {
            return Self::list_all(pool).await;
        }

        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets WHERE \
                computer_name LIKE ?1 OR brand LIKE ?1 OR cpu LIKE ?1 OR \
                ram LIKE ?1 OR storage LIKE ?1 OR consumables LIKE ?1 OR \
                serial_number LIKE ?1 OR asset_tag LIKE ?1 OR \
                custodian_name LIKE ?1 OR custody_date LIKE ?1 \
             ORDER BY id DESC"
        );
        Ok(sqlx::query_as::<_, Asset>(&query)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await?)
    }
}

/// Custody date for persisting a draft: the drafted date, or today.
fn resolve_custody_date(draft: &AssetDraft) -> NaiveDate {
    draft
        .custody_date
        .unwrap_or_else(|| Local::now().date_naive())
}
