//! Integration tests for substring search across asset fields.

use chrono::NaiveDate;
use demirbas_core::record::AssetDraft;
use demirbas_db::repositories::AssetRepo;
use demirbas_db::DbPool;

fn draft(computer_name: &str, asset_tag: &str) -> AssetDraft {
    AssetDraft {
        computer_name: computer_name.to_string(),
        brand: "Dell".to_string(),
        cpu: "i5-6500".to_string(),
        ram: "8GB".to_string(),
        storage: "256GB SSD".to_string(),
        asset_tag: asset_tag.to_string(),
        ..AssetDraft::default()
    }
}

async fn setup(pool: &DbPool) {
    demirbas_db::init_schema(pool).await.unwrap();
}

#[sqlx::test]
async fn search_matches_any_field_most_recent_first(pool: DbPool) {
    setup(&pool).await;

    let first = AssetRepo::create(&pool, &draft("PC1", "DMB-001")).await.unwrap();
    let second = AssetRepo::create(&pool, &draft("PC1", "DMB-002")).await.unwrap();

    let by_brand = AssetRepo::search(&pool, "Dell").await.unwrap();
    let ids: Vec<_> = by_brand.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let by_tag = AssetRepo::search(&pool, "DMB-001").await.unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, first.id);
}

#[sqlx::test]
async fn search_is_case_insensitive(pool: DbPool) {
    setup(&pool).await;
    AssetRepo::create(&pool, &draft("PC1", "DMB-001")).await.unwrap();

    assert_eq!(AssetRepo::search(&pool, "dell").await.unwrap().len(), 1);
    assert_eq!(AssetRepo::search(&pool, "DELL").await.unwrap().len(), 1);
    assert_eq!(AssetRepo::search(&pool, "dmb-001").await.unwrap().len(), 1);
}

#[sqlx::test]
async fn search_covers_optional_fields(pool: DbPool) {
    setup(&pool).await;

    let mut input = draft("PC1", "DMB-001");
    input.consumables = "Docking station".to_string();
    input.serial_number = "SN-12345".to_string();
    input.custodian_name = "Gül Öztürk".to_string();
    AssetRepo::create(&pool, &input).await.unwrap();

    assert_eq!(AssetRepo::search(&pool, "Docking").await.unwrap().len(), 1);
    assert_eq!(AssetRepo::search(&pool, "SN-123").await.unwrap().len(), 1);
    assert_eq!(AssetRepo::search(&pool, "Öztürk").await.unwrap().len(), 1);
}

#[sqlx::test]
async fn search_matches_custody_date_as_text(pool: DbPool) {
    setup(&pool).await;

    let mut input = draft("PC1", "DMB-001");
    input.custody_date = NaiveDate::from_ymd_opt(2024, 3, 5);
    AssetRepo::create(&pool, &input).await.unwrap();

    assert_eq!(AssetRepo::search(&pool, "2024-03").await.unwrap().len(), 1);
    assert!(AssetRepo::search(&pool, "2019").await.unwrap().is_empty());
}

#[sqlx::test]
async fn empty_term_lists_everything(pool: DbPool) {
    setup(&pool).await;

    AssetRepo::create(&pool, &draft("PC1", "DMB-001")).await.unwrap();
    AssetRepo::create(&pool, &draft("PC2", "DMB-002")).await.unwrap();

    let all = AssetRepo::list_all(&pool).await.unwrap();
    for term in ["", "   "] {
        let found = AssetRepo::search(&pool, term).await.unwrap();
        assert_eq!(found.len(), all.len());
        let found_ids: Vec<_> = found.iter().map(|a| a.id).collect();
        let all_ids: Vec<_> = all.iter().map(|a| a.id).collect();
        assert_eq!(found_ids, all_ids);
    }
}

#[sqlx::test]
async fn unmatched_term_returns_nothing(pool: DbPool) {
    setup(&pool).await;
    AssetRepo::create(&pool, &draft("PC1", "DMB-001")).await.unwrap();

    assert!(AssetRepo::search(&pool, "ThinkPad").await.unwrap().is_empty());
}
