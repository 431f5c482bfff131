use std::collections::HashMap;

use crate::core::{classify, title_overlaps, MatchRole};
use crate::models::domain::{Skill, User};
use crate::models::requests::{CreateSkillRequest, ListSkillsQuery, UpdateSkillRequest};
use crate::models::responses::{SkillDetail, SkillMatch, SkillMatchesResponse};
use crate::services::db::{Database, StoreError};

impl Database {
    /// List skills, optionally narrowed by category, teach/learn intent and
    /// a case-insensitive title/description search
    pub async fn list_skills(&self, query: &ListSkillsQuery) -> Result<Vec<Skill>, StoreError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT * FROM skills
            WHERE ($1::skill_category IS NULL OR category = $1)
              AND ($2::bool IS NULL OR can_teach = $2)
              AND ($3::bool IS NULL OR want_learn = $3)
              AND ($4::text IS NULL
                   OR title ILIKE '%' || $4 || '%'
                   OR description ILIKE '%' || $4 || '%')
            ORDER BY id
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(query.category)
        .bind(query.can_teach)
        .bind(query.want_learn)
        .bind(&query.search)
        .bind(i64::from(query.limit))
        .bind(i64::from(query.skip))
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    /// Get a skill by id
    pub async fn get_skill(&self, id: i32) -> Result<Skill, StoreError> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { entity: "skill", id })
    }

    /// Get a skill together with the users offering or seeking it
    pub async fn get_skill_detail(&self, id: i32) -> Result<SkillDetail, StoreError> {
        let skill = self.get_skill(id).await?;
        let users = self.skill_users(id).await?;

        Ok(SkillDetail { skill, users })
    }

    /// Create a skill and link it to its owner
    ///
    /// The insert and the user_skills link commit together, so a failure on
    /// either leaves no orphaned posting behind.
    pub async fn create_skill(
        &self,
        owner_id: i32,
        req: &CreateSkillRequest,
    ) -> Result<Skill, StoreError> {
        let mut tx = self.pool.begin().await?;

        let owner = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE id = $1")
            .bind(owner_id)
            .fetch_optional(&mut *tx)
            .await?;
        if owner.is_none() {
            return Err(StoreError::NotFound {
                entity: "user",
                id: owner_id,
            });
        }

        if let Some(category_id) = req.category_id {
            let category = sqlx::query_scalar::<_, i32>("SELECT id FROM categories WHERE id = $1")
                .bind(category_id)
                .fetch_optional(&mut *tx)
                .await?;
            if category.is_none() {
                return Err(StoreError::NotFound {
                    entity: "category",
                    id: category_id,
                });
            }
        }

        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (title, description, category, category_id, level, can_teach, want_learn)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.category)
        .bind(req.category_id)
        .bind(req.level)
        .bind(req.can_teach)
        .bind(req.want_learn)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO user_skills (user_id, skill_id) VALUES ($1, $2)")
            .bind(owner_id)
            .bind(skill.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!("Created skill {} ({})", skill.id, skill.title);
        Ok(skill)
    }

    /// Apply a partial update to a skill
    ///
    /// The merged row is re-checked against the teach/learn rule before it is
    /// written, so a pair of individually valid patches cannot produce a
    /// posting that both offers and asks.
    pub async fn update_skill(&self, id: i32, req: &UpdateSkillRequest) -> Result<Skill, StoreError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StoreError::NotFound { entity: "skill", id })?;

        let can_teach = req.can_teach.unwrap_or(current.can_teach);
        let want_learn = req.want_learn.unwrap_or(current.want_learn);
        if can_teach && want_learn {
            return Err(StoreError::InvalidInput(
                "a skill cannot be offered to teach and asked to learn at once".into(),
            ));
        }

        if let Some(category_id) = req.category_id {
            let category = sqlx::query_scalar::<_, i32>("SELECT id FROM categories WHERE id = $1")
                .bind(category_id)
                .fetch_optional(&mut *tx)
                .await?;
            if category.is_none() {
                return Err(StoreError::NotFound {
                    entity: "category",
                    id: category_id,
                });
            }
        }

        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET
                title = $2,
                description = $3,
                category = $4,
                category_id = $5,
                level = $6,
                can_teach = $7,
                want_learn = $8,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.title.as_ref().unwrap_or(&current.title))
        .bind(req.description.as_ref().unwrap_or(&current.description))
        .bind(req.category.unwrap_or(current.category))
        .bind(req.category_id.or(current.category_id))
        .bind(req.level.unwrap_or(current.level))
        .bind(can_teach)
        .bind(want_learn)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(skill)
    }

    /// Delete a skill
    ///
    /// Exchanges keep a foreign key to the skill they negotiate over, so a
    /// referenced skill refuses deletion instead of cascading.
    pub async fn delete_skill(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                StoreError::conflict_on(e, "skill is referenced by existing exchanges")
            })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { entity: "skill", id });
        }

        tracing::debug!("Deleted skill {}", id);
        Ok(())
    }

    /// Find counterpart postings for a skill
    ///
    /// Candidates come from the same category; the title comparison and the
    /// teacher/student classification run here rather than in SQL so pattern
    /// metacharacters in titles stay literal.
    pub async fn find_skill_matches(&self, id: i32) -> Result<SkillMatchesResponse, StoreError> {
        let skill = self.get_skill(id).await?;

        let candidates = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills WHERE category = $1 AND id <> $2 ORDER BY id",
        )
        .bind(skill.category)
        .bind(skill.id)
        .fetch_all(&self.pool)
        .await?;

        let mut matched: Vec<(Skill, MatchRole)> = Vec::new();
        for candidate in candidates {
            if !title_overlaps(&skill.title, &candidate.title) {
                continue;
            }
            if let Some(role) = classify(&skill, &candidate) {
                matched.push((candidate, role));
            }
        }

        let ids: Vec<i32> = matched.iter().map(|(s, _)| s.id).collect();
        let mut users_by_skill = self.users_for_skills(&ids).await?;

        let matches: Vec<SkillMatch> = matched
            .into_iter()
            .map(|(candidate, role)| {
                let users = users_by_skill.remove(&candidate.id).unwrap_or_default();
                SkillMatch {
                    role,
                    skill: candidate,
                    users,
                }
            })
            .collect();

        tracing::debug!("Found {} matches for skill {}", matches.len(), id);
        Ok(SkillMatchesResponse {
            matches_count: matches.len(),
            skill,
            matches,
        })
    }

    /// Users linked to one skill, oldest link first
    pub(crate) async fn skill_users(&self, skill_id: i32) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.* FROM users u
            JOIN user_skills us ON us.user_id = u.id
            WHERE us.skill_id = $1
            ORDER BY u.id
            "#,
        )
        .bind(skill_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Users linked to each of the given skills, grouped by skill id
    async fn users_for_skills(
        &self,
        skill_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<User>>, StoreError> {
        if skill_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, SkillUserRow>(
            r#"
            SELECT us.skill_id, u.*
            FROM users u
            JOIN user_skills us ON us.user_id = u.id
            WHERE us.skill_id = ANY($1)
            ORDER BY us.skill_id, u.id
            "#,
        )
        .bind(skill_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i32, Vec<User>> = HashMap::new();
        for row in rows {
            grouped.entry(row.skill_id).or_default().push(row.user);
        }
        Ok(grouped)
    }
}

#[derive(sqlx::FromRow)]
struct SkillUserRow {
    skill_id: i32,
    #[sqlx(flatten)]
    user: User,
}
