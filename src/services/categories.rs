use crate::models::domain::Category;
use crate::models::requests::CategoryRequest;
use crate::services::db::{Database, StoreError};

const CATEGORY_CONSTRAINTS: &[(&str, &'static str)] = &[("categories_name_key", "category name")];

impl Database {
    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    /// Get a category by id
    pub async fn get_category(&self, id: i32) -> Result<Category, StoreError> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "category",
                id,
            })
    }

    /// Create a category
    pub async fn create_category(&self, req: &CategoryRequest) -> Result<Category, StoreError> {
        let category =
            sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES ($1) RETURNING *")
                .bind(&req.name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| StoreError::duplicate_on(e, CATEGORY_CONSTRAINTS))?;

        tracing::debug!("Created category {} ({})", category.id, category.name);
        Ok(category)
    }

    /// Rename a category
    pub async fn update_category(
        &self,
        id: i32,
        req: &CategoryRequest,
    ) -> Result<Category, StoreError> {
        sqlx::query_as::<_, Category>("UPDATE categories SET name = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(&req.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::duplicate_on(e, CATEGORY_CONSTRAINTS))?
            .ok_or(StoreError::NotFound {
                entity: "category",
                id,
            })
    }

    /// Delete a category
    ///
    /// Skills keep a plain foreign key to categories, so a referenced
    /// category refuses deletion.
    pub async fn delete_category(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::conflict_on(e, "category is still referenced by skills"))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "category",
                id,
            });
        }

        tracing::debug!("Deleted category {}", id);
        Ok(())
    }
}
