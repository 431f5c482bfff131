use crate::core::success_rate;
use crate::models::responses::{ActiveUserRow, SuccessRate, TopSkillRow};
use crate::services::db::{Database, StoreError};

impl Database {
    /// The ten most exchanged-over skills
    pub async fn top_skills(&self) -> Result<Vec<TopSkillRow>, StoreError> {
        let rows = sqlx::query_as::<_, TopSkillRow>(
            r#"
            SELECT s.title AS skill, COUNT(e.id) AS exchanges_count
            FROM skills s
            JOIN exchanges e ON e.skill_id = s.id
            GROUP BY s.id
            ORDER BY exchanges_count DESC, s.title
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// The ten users participating in the most exchanges, either side
    pub async fn active_users(&self) -> Result<Vec<ActiveUserRow>, StoreError> {
        let rows = sqlx::query_as::<_, ActiveUserRow>(
            r#"
            SELECT u.username, COUNT(e.id) AS exchanges_count
            FROM users u
            JOIN exchanges e ON e.sender_id = u.id OR e.receiver_id = u.id
            GROUP BY u.id
            ORDER BY exchanges_count DESC, u.username
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Share of exchanges that reached completion, as a percentage
    pub async fn exchange_success_rate(&self) -> Result<SuccessRate, StoreError> {
        let (completed, total) = self.exchange_counts().await?;

        Ok(SuccessRate {
            success_rate: success_rate(completed, total),
        })
    }
}
