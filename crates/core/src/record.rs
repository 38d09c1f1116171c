//! Asset draft record and required-field validation.
//!
//! A draft is what the presentation layer collects from its form
//! fields. The store stamps `id` and `created_at` itself; they are
//! never part of a draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Field values for a new or edited asset record.
///
/// Optional text fields stay as empty strings when unset. A `None`
/// custody date means "default to today"; the store resolves it at
/// insert/update time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetDraft {
    pub computer_name: String,
    pub brand: String,
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub consumables: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub custodian_name: String,
    pub custody_date: Option<NaiveDate>,
}

/// A field that must be non-empty for a draft to be admissible.
///
/// Variant order is the check order: the first empty field in this
/// order is the one reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    ComputerName,
    AssetTag,
    Brand,
    Cpu,
    Ram,
    Storage,
}

impl RequiredField {
    /// User-facing label, matching the form labels of the presentation
    /// layer.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::ComputerName => "Bilgisayar Adı",
            RequiredField::AssetTag => "Demirbaş No",
            RequiredField::Brand => "Bilgisayar Markası",
            RequiredField::Cpu => "İşlemci",
            RequiredField::Ram => "RAM",
            RequiredField::Storage => "Depolama",
        }
    }
}

/// Check a draft against the required-field rules.
///
/// Fields are checked after trimming surrounding whitespace, in the
/// order `RequiredField` declares. Returns the first violation; a
/// correct caller never persists a draft this function rejects.
pub fn validate_draft(draft: &AssetDraft) -> Result<(), ValidationError> {
    let checks = [
        (RequiredField::ComputerName, draft.computer_name.as_str()),
        (RequiredField::AssetTag, draft.asset_tag.as_str()),
        (RequiredField::Brand, draft.brand.as_str()),
        (RequiredField::Cpu, draft.cpu.as_str()),
        (RequiredField::Ram, draft.ram.as_str()),
        (RequiredField::Storage, draft.storage.as_str()),
    ];

    for (field, value) in checks {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> AssetDraft {
        AssetDraft {
            computer_name: "PC1".into(),
            brand: "Dell".into(),
            cpu: "i5-6500".into(),
            ram: "8GB".into(),
            storage: "256GB SSD".into(),
            asset_tag: "DMB-001".into(),
            ..AssetDraft::default()
        }
    }

    #[test]
    fn full_draft_is_admissible() {
        assert!(validate_draft(&full_draft()).is_ok());
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let draft = full_draft();
        assert!(draft.consumables.is_empty());
        assert!(draft.serial_number.is_empty());
        assert!(draft.custodian_name.is_empty());
        assert!(draft.custody_date.is_none());
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn each_required_field_is_enforced() {
        let cases: [fn(&mut AssetDraft); 6] = [
            |d: &mut AssetDraft| d.computer_name.clear(),
            |d: &mut AssetDraft| d.asset_tag.clear(),
            |d: &mut AssetDraft| d.brand.clear(),
            |d: &mut AssetDraft| d.cpu.clear(),
            |d: &mut AssetDraft| d.ram.clear(),
            |d: &mut AssetDraft| d.storage.clear(),
        ];
        for clear in cases {
            let mut draft = full_draft();
            clear(&mut draft);
            assert!(validate_draft(&draft).is_err());
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut draft = full_draft();
        draft.ram = "   ".into();
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::MissingField(RequiredField::Ram))
        );
    }

    #[test]
    fn first_violation_wins_in_fixed_order() {
        let mut draft = full_draft();
        draft.brand.clear();
        draft.storage.clear();
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::MissingField(RequiredField::Brand))
        );

        draft.asset_tag.clear();
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::MissingField(RequiredField::AssetTag))
        );

        draft.computer_name.clear();
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::MissingField(RequiredField::ComputerName))
        );
    }

    #[test]
    fn error_message_names_the_field() {
        let mut draft = full_draft();
        draft.cpu.clear();
        let err = validate_draft(&draft).unwrap_err();
        assert_eq!(err.to_string(), "İşlemci is a required field");
    }
}
