//! Repository for the `status_templates` and `status_template_states` tables.

use sqlx::PgPool;
use tablero_core::types::DbId;

use crate::models::status_template::{
    CreateStatusTemplate, StatusTemplate, StatusTemplateState, StatusTemplateWithStates,
};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

const STATE_COLUMNS: &str = "id, template_id, name, color, sort_order, is_default";

/// Provides CRUD operations for status templates and their states.
pub struct StatusTemplateRepo;

impl StatusTemplateRepo {
    /// Insert a template and all of its states in one transaction. The
    /// template name is stored trimmed.
    ///
    /// States are inserted in submission order, which is the order they are
    /// read back in.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStatusTemplate,
    ) -> Result<StatusTemplateWithStates, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO status_templates (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let template = sqlx::query_as::<_, StatusTemplate>(&query)
            .bind(input.name.trim())
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        let state_query = format!(
            "INSERT INTO status_template_states (template_id, name, color, sort_order, is_default)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {STATE_COLUMNS}"
        );
        let mut rows = Vec::with_capacity(input.states.len());
        for state in &input.states {
            let row = sqlx::query_as::<_, StatusTemplateState>(&state_query)
                .bind(template.id)
                .bind(&state.name)
                .bind(&state.color)
                .bind(state.order)
                .bind(state.is_default)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }

        tx.commit().await?;
        Ok(StatusTemplateWithStates::new(template, &rows))
    }

    /// Find a template by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StatusTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM status_templates WHERE id = $1");
        sqlx::query_as::<_, StatusTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all templates alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<StatusTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM status_templates ORDER BY name ASC");
        sqlx::query_as::<_, StatusTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// List a template's states in submission order.
    pub async fn list_states(
        pool: &PgPool,
        template_id: DbId,
    ) -> Result<Vec<StatusTemplateState>, sqlx::Error> {
        let query = format!(
            "SELECT {STATE_COLUMNS} FROM status_template_states
             WHERE template_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, StatusTemplateState>(&query)
            .bind(template_id)
            .fetch_all(pool)
            .await
    }

    /// Find a template and load its states. `None` if the template is missing.
    pub async fn find_with_states(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StatusTemplateWithStates>, sqlx::Error> {
        let Some(template) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let rows = Self::list_states(pool, id).await?;
        Ok(Some(StatusTemplateWithStates::new(template, &rows)))
    }

    /// Delete a template (states cascade). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM status_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
