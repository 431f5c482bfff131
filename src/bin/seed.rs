//! Seeds a local database with demo users, skills, exchanges and reviews.
//!
//! Intended for development setups; running it twice will fail on the unique
//! username constraint, which is fine for its purpose.

use skillswap_api::config::Settings;
use skillswap_api::models::{
    CreateExchangeRequest, CreateReviewRequest, CreateSkillRequest, CreateUserRequest,
    ExchangeStatus, SkillCategory, SkillLevel, UpdateExchangeRequest,
};
use skillswap_api::services::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn user(username: &str, email: &str, full_name: &str, bio: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        full_name: Some(full_name.to_string()),
        bio: Some(bio.to_string()),
        avatar_url: None,
        phone: None,
        location: None,
    }
}

fn skill(
    title: &str,
    description: &str,
    category: SkillCategory,
    level: SkillLevel,
    can_teach: bool,
) -> CreateSkillRequest {
    CreateSkillRequest {
        title: title.to_string(),
        description: description.to_string(),
        category,
        category_id: None,
        level,
        can_teach,
        want_learn: !can_teach,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(false)
        .init();

    let settings = Settings::load()?;
    let db = Database::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
    )
    .await?;

    info!("Connected, seeding demo data...");

    let alex = db
        .create_user(&user(
            "alex_dev",
            "alex@example.com",
            "Alex Petrenko",
            "Python developer who loves music",
        ))
        .await?;
    let maria = db
        .create_user(&user(
            "maria_music",
            "maria@example.com",
            "Maria Kovalenko",
            "Music teacher looking to pick up programming",
        ))
        .await?;
    let ivan = db
        .create_user(&user(
            "ivan_sport",
            "ivan@example.com",
            "Ivan Shevchenko",
            "Swimming coach curious about technology",
        ))
        .await?;

    info!("Created users {}, {}, {}", alex.username, maria.username, ivan.username);

    let python = db
        .create_skill(
            alex.id,
            &skill(
                "Python programming",
                "Teaching Python fundamentals, Django and FastAPI",
                SkillCategory::Programming,
                SkillLevel::Advanced,
                true,
            ),
        )
        .await?;
    let guitar = db
        .create_skill(
            maria.id,
            &skill(
                "Guitar playing",
                "Can teach guitar from scratch, chords to songs",
                SkillCategory::Music,
                SkillLevel::Intermediate,
                true,
            ),
        )
        .await?;
    let swimming = db
        .create_skill(
            ivan.id,
            &skill(
                "Swimming",
                "Proper swimming technique for all levels",
                SkillCategory::Sports,
                SkillLevel::Expert,
                true,
            ),
        )
        .await?;
    let english = db
        .create_skill(
            maria.id,
            &skill(
                "English language",
                "Looking to improve my conversational English",
                SkillCategory::Languages,
                SkillLevel::Beginner,
                false,
            ),
        )
        .await?;

    info!(
        "Created skills {}, {}, {}, {}",
        python.title, guitar.title, swimming.title, english.title
    );

    // A finished exchange: Alex learned guitar from Maria.
    let completed = db
        .create_exchange(
            alex.id,
            &CreateExchangeRequest {
                receiver_id: maria.id,
                skill_id: guitar.id,
                message: Some("Hi! I want to learn guitar and can teach Python in return".into()),
                hours_proposed: 5,
            },
        )
        .await?;
    db.update_exchange_status(
        completed.id,
        maria.id,
        &UpdateExchangeRequest {
            status: ExchangeStatus::Accepted,
            message: None,
        },
    )
    .await?;
    db.update_exchange_status(
        completed.id,
        maria.id,
        &UpdateExchangeRequest {
            status: ExchangeStatus::Completed,
            message: None,
        },
    )
    .await?;

    // And one still waiting on Alex.
    db.create_exchange(
        maria.id,
        &CreateExchangeRequest {
            receiver_id: alex.id,
            skill_id: python.id,
            message: Some("Let's swap knowledge!".into()),
            hours_proposed: 5,
        },
    )
    .await?;

    info!("Created exchanges (one completed, one pending)");

    db.create_review(
        alex.id,
        &CreateReviewRequest {
            exchange_id: completed.id,
            rating: 5,
            comment: Some("Great teacher, very patient explanations".into()),
        },
    )
    .await?;
    db.create_review(
        maria.id,
        &CreateReviewRequest {
            exchange_id: completed.id,
            rating: 5,
            comment: Some("Explains programming wonderfully, recommended!".into()),
        },
    )
    .await?;

    info!("Created two reviews on the completed exchange");
    info!("Seeding finished");

    Ok(())
}
