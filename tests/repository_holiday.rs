mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use dopamine_calendar::domain::repositories::HolidayRepository;
use dopamine_calendar::infrastructure::persistence::SqliteHolidayRepository;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_replace_for_year_is_wholesale(pool: SqlitePool) {
    let repo = SqliteHolidayRepository::new(Arc::new(pool));

    repo.replace_for_year(
        "CN",
        2025,
        vec![
            common::holiday("CN", "2025-01-01", "元旦", "New Year's Day"),
            common::holiday("CN", "2025-05-01", "劳动节", "Labour Day"),
            common::holiday("CN", "2025-10-01", "国庆节", "National Day"),
        ],
    )
    .await
    .unwrap();

    // The second fetch dropped one day; the store must match, not merge.
    repo.replace_for_year(
        "CN",
        2025,
        vec![
            common::holiday("CN", "2025-01-01", "元旦", "New Year's Day"),
            common::holiday("CN", "2025-10-01", "国庆节", "National Day"),
        ],
    )
    .await
    .unwrap();

    let found = repo.find_for_year("CN", 2025).await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].name, "New Year's Day");
    assert_eq!(found[1].name, "National Day");
}

#[sqlx::test]
async fn test_replace_for_year_leaves_other_pairs_alone(pool: SqlitePool) {
    let repo = SqliteHolidayRepository::new(Arc::new(pool));

    repo.replace_for_year(
        "CN",
        2025,
        vec![common::holiday("CN", "2025-10-01", "国庆节", "National Day")],
    )
    .await
    .unwrap();
    repo.replace_for_year(
        "JP",
        2025,
        vec![common::holiday("JP", "2025-01-01", "元日", "New Year's Day")],
    )
    .await
    .unwrap();

    repo.replace_for_year("CN", 2025, Vec::new()).await.unwrap();

    assert!(repo.find_for_year("CN", 2025).await.unwrap().is_empty());
    assert_eq!(repo.find_for_year("JP", 2025).await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_find_for_year_orders_by_date(pool: SqlitePool) {
    let repo = SqliteHolidayRepository::new(Arc::new(pool));

    repo.replace_for_year(
        "CN",
        2025,
        vec![
            common::holiday("CN", "2025-10-01", "国庆节", "National Day"),
            common::holiday("CN", "2025-01-01", "元旦", "New Year's Day"),
            common::holiday("CN", "2025-05-01", "劳动节", "Labour Day"),
        ],
    )
    .await
    .unwrap();

    let found = repo.find_for_year("CN", 2025).await.unwrap();
    let dates: Vec<String> = found.iter().map(|h| h.date.to_string()).collect();
    assert_eq!(dates, ["2025-01-01", "2025-05-01", "2025-10-01"]);
}

#[sqlx::test]
async fn test_status_is_none_before_first_fetch(pool: SqlitePool) {
    let repo = SqliteHolidayRepository::new(Arc::new(pool));

    assert!(repo.status("CN", 2025).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_mark_refreshed_upserts(pool: SqlitePool) {
    let repo = SqliteHolidayRepository::new(Arc::new(pool));

    let first = Utc::now() - Duration::hours(10);
    repo.mark_refreshed("CN", 2025, first).await.unwrap();

    let second = Utc::now();
    repo.mark_refreshed("CN", 2025, second).await.unwrap();

    let status = repo.status("CN", 2025).await.unwrap().unwrap();
    assert_eq!(status.country, "CN");
    assert_eq!(status.year, 2025);
    assert!((status.last_updated - second).num_seconds().abs() < 2);
}

#[sqlx::test]
async fn test_status_freshness_window(pool: SqlitePool) {
    let repo = SqliteHolidayRepository::new(Arc::new(pool));

    repo.mark_refreshed("CN", 2025, Utc::now() - Duration::hours(10))
        .await
        .unwrap();

    let status = repo.status("CN", 2025).await.unwrap().unwrap();
    assert!(status.is_fresh(Duration::hours(24)));
    assert!(!status.is_fresh(Duration::hours(1)));
}

#[sqlx::test]
async fn test_all_statuses_newest_first(pool: SqlitePool) {
    let repo = SqliteHolidayRepository::new(Arc::new(pool));

    repo.mark_refreshed("CN", 2024, Utc::now() - Duration::hours(5))
        .await
        .unwrap();
    repo.mark_refreshed("CN", 2025, Utc::now() - Duration::hours(1))
        .await
        .unwrap();
    repo.mark_refreshed("JP", 2025, Utc::now() - Duration::hours(3))
        .await
        .unwrap();

    let statuses = repo.all_statuses().await.unwrap();
    let pairs: Vec<(String, i32)> = statuses
        .into_iter()
        .map(|s| (s.country, s.year))
        .collect();

    assert_eq!(
        pairs,
        [
            ("CN".to_string(), 2025),
            ("JP".to_string(), 2025),
            ("CN".to_string(), 2024),
        ]
    );
}
