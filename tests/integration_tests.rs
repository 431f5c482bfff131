// Integration tests for the SkillSwap API

use actix_web::body;
use actix_web::http::StatusCode;
use actix_web::ResponseError;
use chrono::Utc;
use skillswap_api::config::Settings;
use skillswap_api::core::{
    authorize_transition, check_eligibility, classify, title_overlaps, MatchRole, TransitionError,
};
use skillswap_api::models::{
    Exchange, ExchangeStatus, ListSkillsQuery, PaginationQuery, Skill, SkillCategory, SkillLevel,
};
use skillswap_api::services::{PhotoError, PhotoStore, StoreError};

fn create_test_exchange(sender_id: i32, receiver_id: i32, status: ExchangeStatus) -> Exchange {
    Exchange {
        id: 1,
        sender_id,
        receiver_id,
        skill_id: 10,
        message: Some("let's trade".to_string()),
        status,
        hours_proposed: 3,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn create_test_skill(
    id: i32,
    title: &str,
    category: SkillCategory,
    can_teach: bool,
    want_learn: bool,
) -> Skill {
    Skill {
        id,
        title: title.to_string(),
        description: format!("{} posting", title),
        category,
        category_id: None,
        level: SkillLevel::Intermediate,
        can_teach,
        want_learn,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn apply(
    exchange: &mut Exchange,
    target: ExchangeStatus,
    actor: i32,
) -> Result<(), TransitionError> {
    authorize_transition(exchange, target, actor)?;
    exchange.status = target;
    Ok(())
}

#[test]
fn test_exchange_lifecycle_through_to_reviews() {
    let mut exchange = create_test_exchange(1, 2, ExchangeStatus::Pending);

    // Nobody can review an open proposal.
    assert!(check_eligibility(&exchange, 1).is_err());

    // The receiver accepts, then either party marks it finished.
    apply(&mut exchange, ExchangeStatus::Accepted, 2).unwrap();
    apply(&mut exchange, ExchangeStatus::Completed, 1).unwrap();

    // Both parties may now review, each targeting the other.
    assert_eq!(check_eligibility(&exchange, 1), Ok(2));
    assert_eq!(check_eligibility(&exchange, 2), Ok(1));

    // The completed exchange is frozen.
    for target in [
        ExchangeStatus::Pending,
        ExchangeStatus::Accepted,
        ExchangeStatus::Cancelled,
    ] {
        assert!(apply(&mut exchange, target, 1).is_err());
    }
}

#[test]
fn test_rejected_proposal_goes_nowhere() {
    let mut exchange = create_test_exchange(1, 2, ExchangeStatus::Pending);

    // Sender cannot force acceptance; the receiver turns it down.
    assert_eq!(
        apply(&mut exchange, ExchangeStatus::Accepted, 1),
        Err(TransitionError::NotReceiver)
    );
    apply(&mut exchange, ExchangeStatus::Rejected, 2).unwrap();

    assert!(apply(&mut exchange, ExchangeStatus::Accepted, 2).is_err());
    assert!(check_eligibility(&exchange, 2).is_err());
}

#[test]
fn test_matching_pipeline_classifies_candidates() {
    // A learner looking for guitar tuition.
    let source = create_test_skill(1, "Guitar", SkillCategory::Music, false, true);

    let candidates = vec![
        create_test_skill(2, "Guitar lessons", SkillCategory::Music, true, false),
        create_test_skill(3, "Classical Guitar", SkillCategory::Music, false, true),
        create_test_skill(4, "Piano lessons", SkillCategory::Music, true, false),
        create_test_skill(5, "guitar maintenance", SkillCategory::Music, true, false),
    ];

    let matches: Vec<(i32, MatchRole)> = candidates
        .iter()
        .filter(|c| title_overlaps(&source.title, &c.title))
        .filter_map(|c| classify(&source, c).map(|role| (c.id, role)))
        .collect();

    // The fellow learner is dropped, the piano posting never matched.
    assert_eq!(
        matches,
        vec![(2, MatchRole::Teacher), (5, MatchRole::Teacher)]
    );
}

#[test]
fn test_matching_pipeline_finds_students() {
    let source = create_test_skill(1, "Guitar lessons", SkillCategory::Music, true, false);
    let learner = create_test_skill(2, "Guitar lessons for beginners", SkillCategory::Music, false, true);

    assert!(title_overlaps(&source.title, &learner.title));
    assert_eq!(classify(&source, &learner), Some(MatchRole::Student));
}

#[tokio::test]
async fn test_store_errors_render_the_envelope() {
    let err = StoreError::NotFound {
        entity: "skill",
        id: 7,
    };
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let bytes = body::to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["status_code"], 404);
    assert!(json["message"].as_str().unwrap().contains("skill"));
}

#[tokio::test]
async fn test_duplicate_field_reports_conflict() {
    let err = StoreError::Duplicate { field: "username" };
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let bytes = body::to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "duplicate");
    assert_eq!(json["message"], "username is already taken");
}

#[tokio::test]
async fn test_photo_store_upload_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = PhotoStore::new(dir.path().join("uploads")).unwrap();

    let first = store.save("image/jpeg", b"first image").await.unwrap();
    let second = store.save("image/png", b"second image").await.unwrap();

    // Newest first, and both resolvable on disk.
    let listing = store.list().await;
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].filename, second.filename);

    let path = store.resolve(&first.filename).await.unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"first image");

    // Traversal attempts look like missing photos.
    let err = store.resolve("../../etc/passwd").await.unwrap_err();
    assert!(matches!(err, PhotoError::NotFound(_)));
}

#[test]
fn test_query_defaults() {
    let page: PaginationQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 100);

    let filters: ListSkillsQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(filters.limit, 100);
    assert!(filters.category.is_none());
    assert!(filters.search.is_none());
}

#[test]
fn test_settings_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.toml");
    std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.server.port, 9000);
    // Untouched sections fall back to their defaults.
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.uploads.dir, "uploads");
}
