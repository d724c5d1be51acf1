//! Installed software repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::software::{CreateSoftware, Software, SoftwareQuery, UpdateSoftware},
};

#[derive(Clone)]
pub struct SoftwareRepository {
    pool: Pool<Postgres>,
}

impl SoftwareRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List software with optional filters
    pub async fn list(&self, query: &SoftwareQuery) -> AppResult<Vec<Software>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.pc_id.is_some() {
            conditions.push(format!("pc_id = ${}", idx));
            idx += 1;
        }
        if query.expiring_before.is_some() {
            conditions.push(format!("expiry_date <= ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!("SELECT * FROM software {} ORDER BY pc_id, name", where_clause);
        let mut builder = sqlx::query_as::<_, Software>(&select_q);
        if let Some(pc_id) = query.pc_id {
            builder = builder.bind(pc_id);
        }
        if let Some(date) = query.expiring_before {
            builder = builder.bind(date);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Software> {
        sqlx::query_as::<_, Software>("SELECT * FROM software WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Software {} not found", id)))
    }

    /// Register software on a PC; `(pc, name, version)` is unique
    pub async fn create(&self, data: &CreateSoftware) -> AppResult<Software> {
        let row = sqlx::query_as::<_, Software>(
            r#"
            INSERT INTO software (pc_id, name, version, license_key, expiry_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.pc_id)
        .bind(&data.name)
        .bind(&data.version)
        .bind(&data.license_key)
        .bind(data.expiry_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateSoftware) -> AppResult<Software> {
        sqlx::query_as::<_, Software>(
            r#"
            UPDATE software SET
                name = COALESCE($1, name),
                version = COALESCE($2, version),
                license_key = COALESCE($3, license_key),
                expiry_date = COALESCE($4, expiry_date),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.version)
        .bind(&data.license_key)
        .bind(data.expiry_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Software {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM software WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Software {} not found", id)));
        }
        Ok(())
    }
}
