use chrono::NaiveDate;
use demirbas_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `assets` table.
///
/// `id` and `created_at` are assigned by the store at insert and never
/// change afterwards. Optional text fields are empty strings when
/// unset, mirroring how the form submits them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub computer_name: String,
    pub brand: String,
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub consumables: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub custodian_name: String,
    /// Start of the custody assignment, stored as `YYYY-MM-DD` text.
    pub custody_date: NaiveDate,
    pub created_at: Timestamp,
}
