use crate::core::authorize_transition;
use crate::models::domain::{Exchange, ExchangeStatus};
use crate::models::requests::{CreateExchangeRequest, ListExchangesQuery, UpdateExchangeRequest};
use crate::models::responses::ExchangeDetail;
use crate::services::db::{Database, StoreError};

impl Database {
    /// List exchanges, optionally narrowed by status or participant
    pub async fn list_exchanges(
        &self,
        query: &ListExchangesQuery,
    ) -> Result<Vec<Exchange>, StoreError> {
        let exchanges = sqlx::query_as::<_, Exchange>(
            r#"
            SELECT * FROM exchanges
            WHERE ($1::exchange_status IS NULL OR status = $1)
              AND ($2::int IS NULL OR sender_id = $2 OR receiver_id = $2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(query.status_filter)
        .bind(query.user_id)
        .bind(i64::from(query.limit))
        .bind(i64::from(query.skip))
        .fetch_all(&self.pool)
        .await?;

        Ok(exchanges)
    }

    /// Get an exchange by id
    pub async fn get_exchange(&self, id: i32) -> Result<Exchange, StoreError> {
        sqlx::query_as::<_, Exchange>("SELECT * FROM exchanges WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "exchange",
                id,
            })
    }

    /// Get an exchange with its sender, receiver and skill hydrated
    pub async fn get_exchange_detail(&self, id: i32) -> Result<ExchangeDetail, StoreError> {
        let exchange = self.get_exchange(id).await?;
        let sender = self.get_user(exchange.sender_id).await?;
        let receiver = self.get_user(exchange.receiver_id).await?;
        let skill = self.get_skill(exchange.skill_id).await?;

        Ok(ExchangeDetail {
            exchange,
            sender,
            receiver,
            skill,
        })
    }

    /// Create an exchange proposal
    ///
    /// The sender, receiver and skill are verified inside one transaction so
    /// the insert cannot race a concurrent delete of any of them.
    pub async fn create_exchange(
        &self,
        sender_id: i32,
        req: &CreateExchangeRequest,
    ) -> Result<Exchange, StoreError> {
        if sender_id == req.receiver_id {
            return Err(StoreError::InvalidInput(
                "an exchange needs two distinct participants".into(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        for (entity, id) in [
            ("sender", sender_id),
            ("receiver", req.receiver_id),
        ] {
            let found = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
            if found.is_none() {
                return Err(StoreError::NotFound { entity, id });
            }
        }

        let skill = sqlx::query_scalar::<_, i32>("SELECT id FROM skills WHERE id = $1")
            .bind(req.skill_id)
            .fetch_optional(&mut *tx)
            .await?;
        if skill.is_none() {
            return Err(StoreError::NotFound {
                entity: "skill",
                id: req.skill_id,
            });
        }

        let exchange = sqlx::query_as::<_, Exchange>(
            r#"
            INSERT INTO exchanges (sender_id, receiver_id, skill_id, message, hours_proposed)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(req.receiver_id)
        .bind(req.skill_id)
        .bind(&req.message)
        .bind(req.hours_proposed)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "Created exchange {} from user {} to user {}",
            exchange.id,
            exchange.sender_id,
            exchange.receiver_id
        );
        Ok(exchange)
    }

    /// Move an exchange to a new status on behalf of the acting user
    ///
    /// The row is locked for the duration of the transaction, so two parties
    /// racing to resolve the same proposal serialize and the loser sees the
    /// already-applied status.
    pub async fn update_exchange_status(
        &self,
        id: i32,
        actor: i32,
        req: &UpdateExchangeRequest,
    ) -> Result<Exchange, StoreError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Exchange>("SELECT * FROM exchanges WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "exchange",
                id,
            })?;

        authorize_transition(&current, req.status, actor)?;

        let exchange = sqlx::query_as::<_, Exchange>(
            r#"
            UPDATE exchanges SET
                status = $2,
                message = COALESCE($3, message),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.status)
        .bind(&req.message)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Exchange {} moved from {:?} to {:?} by user {}",
            id,
            current.status,
            exchange.status,
            actor
        );
        Ok(exchange)
    }

    /// Exchanges the user has sent, newest first
    pub async fn sent_exchanges(&self, user_id: i32) -> Result<Vec<Exchange>, StoreError> {
        let exchanges = sqlx::query_as::<_, Exchange>(
            "SELECT * FROM exchanges WHERE sender_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exchanges)
    }

    /// Exchanges the user has received, newest first
    pub async fn received_exchanges(&self, user_id: i32) -> Result<Vec<Exchange>, StoreError> {
        let exchanges = sqlx::query_as::<_, Exchange>(
            "SELECT * FROM exchanges WHERE receiver_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exchanges)
    }

    /// Completed/total counts used by the success-rate statistic
    pub(crate) async fn exchange_counts(&self) -> Result<(i64, i64), StoreError> {
        let row = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = $1) AS completed,
                COUNT(*) AS total
            FROM exchanges
            "#,
        )
        .bind(ExchangeStatus::Completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
