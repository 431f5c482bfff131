use crate::models::domain::{Skill, User};
use crate::models::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::db::{Database, StoreError};

// Constraint names from migrations/0001_init.sql.
const USER_CONSTRAINTS: &[(&str, &'static str)] = &[
    ("users_username_key", "username"),
    ("users_email_key", "email"),
];

impl Database {
    /// List users with pagination
    pub async fn list_users(&self, skip: u32, limit: u32) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id LIMIT $1 OFFSET $2")
            .bind(i64::from(limit))
            .bind(i64::from(skip))
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Get a user by id
    pub async fn get_user(&self, id: i32) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { entity: "user", id })
    }

    /// Create a user
    ///
    /// Unique username/email violations surface as field-level duplicates.
    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, full_name, bio, avatar_url, phone, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.full_name)
        .bind(&req.bio)
        .bind(&req.avatar_url)
        .bind(&req.phone)
        .bind(&req.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::duplicate_on(e, USER_CONSTRAINTS))?;

        tracing::debug!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    /// Apply a partial profile update
    ///
    /// Absent fields keep their stored value; the merge happens in SQL via
    /// COALESCE since no cross-field rule applies to user profiles.
    pub async fn update_user(&self, id: i32, req: &UpdateUserRequest) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                full_name = COALESCE($2, full_name),
                bio = COALESCE($3, bio),
                avatar_url = COALESCE($4, avatar_url),
                phone = COALESCE($5, phone),
                location = COALESCE($6, location),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.full_name)
        .bind(&req.bio)
        .bind(&req.avatar_url)
        .bind(&req.phone)
        .bind(&req.location)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { entity: "user", id })
    }

    /// List the skills associated with a user
    pub async fn user_skills(&self, id: i32) -> Result<Vec<Skill>, StoreError> {
        let exists = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        if exists.is_none() {
            return Err(StoreError::NotFound { entity: "user", id });
        }

        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT s.* FROM skills s
            JOIN user_skills us ON us.skill_id = s.id
            WHERE us.user_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }
}
