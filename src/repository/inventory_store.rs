//! Transactional `InventoryStore` on Postgres, used by the import pipeline

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Transaction};

use super::{details, lab_equipment::INSERT_EQUIPMENT, pcs::INSERT_PC};
use crate::{
    error::{AppError, AppResult},
    importer::InventoryStore,
    models::{
        lab::{CreateLab, Lab},
        lab_equipment::{CreateLabEquipment, EquipmentDetail, LabEquipment},
        pc::{CreatePc, Pc},
    },
};

/// One import batch. Nothing is visible to other connections until
/// [`commit`](Self::commit); dropping the store rolls the batch back.
pub struct PgInventoryStore {
    tx: Transaction<'static, Postgres>,
}

impl PgInventoryStore {
    pub async fn begin(pool: &Pool<Postgres>) -> AppResult<Self> {
        Ok(Self {
            tx: pool.begin().await?,
        })
    }

    pub async fn commit(self) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn find_lab(&mut self, id: i32) -> AppResult<Option<Lab>> {
        let lab = sqlx::query_as::<_, Lab>("SELECT * FROM labs WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(lab)
    }

    async fn lab_exists(&mut self, name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM labs WHERE name = $1)")
            .bind(name)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(exists)
    }

    async fn get_or_create_lab(&mut self, name: &str) -> AppResult<(Lab, bool)> {
        let created = sqlx::query_as::<_, Lab>(
            "INSERT INTO labs (name) VALUES ($1) ON CONFLICT (name) DO NOTHING RETURNING *",
        )
        .bind(name)
        .fetch_optional(&mut *self.tx)
        .await?;
        if let Some(lab) = created {
            return Ok((lab, true));
        }

        let lab = sqlx::query_as::<_, Lab>("SELECT * FROM labs WHERE name = $1")
            .bind(name)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok((lab, false))
    }

    async fn create_lab(&mut self, data: &CreateLab) -> AppResult<Lab> {
        let lab = sqlx::query_as::<_, Lab>(
            "INSERT INTO labs (name, location) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.location)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(lab)
    }

    async fn pc_exists(&mut self, lab_id: i32, device_name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM pcs WHERE lab_id = $1 AND device_name = $2)",
        )
        .bind(lab_id)
        .bind(device_name)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(exists)
    }

    async fn create_pc(&mut self, data: &CreatePc) -> AppResult<Pc> {
        let pc = sqlx::query_as::<_, Pc>(INSERT_PC)
            .bind(data.lab_id)
            .bind(&data.device_name)
            .bind(&data.product_id)
            .bind(&data.processor)
            .bind(&data.ram)
            .bind(&data.storage)
            .bind(data.status.as_str())
            .bind(data.connected)
            .bind(data.gpu)
            .bind(data.peripherals)
            .bind(&data.brand)
            .bind(&data.serial_number)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(pc)
    }

    async fn equipment_exists(&mut self, lab_id: i32, equipment_code: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM lab_equipment WHERE lab_id = $1 AND equipment_code = $2)",
        )
        .bind(lab_id)
        .bind(equipment_code)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(exists)
    }

    async fn create_equipment(&mut self, data: &CreateLabEquipment) -> AppResult<LabEquipment> {
        let equipment = sqlx::query_as::<_, LabEquipment>(INSERT_EQUIPMENT)
            .bind(data.lab_id)
            .bind(&data.equipment_code)
            .bind(&data.name)
            .bind(data.category.as_str())
            .bind(data.equipment_type.as_str())
            .bind(&data.brand)
            .bind(&data.model_name)
            .bind(data.quantity)
            .bind(data.status.as_str())
            .bind(data.is_networked)
            .bind(data.installation_date)
            .bind(&data.location_in_lab)
            .bind(&data.remarks)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(equipment)
    }

    async fn create_detail(
        &mut self,
        equipment: &LabEquipment,
        detail: &EquipmentDetail,
    ) -> AppResult<()> {
        // The table constraints refuse a mismatch too; this gives a readable message
        detail
            .check_attachable(equipment.equipment_type)
            .map_err(AppError::BusinessRule)?;
        details::insert(&mut *self.tx, equipment, detail).await?;
        Ok(())
    }

    async fn savepoint(&mut self) -> AppResult<()> {
        sqlx::query("SAVEPOINT import_row")
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn release_savepoint(&mut self) -> AppResult<()> {
        sqlx::query("RELEASE SAVEPOINT import_row")
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn rollback_to_savepoint(&mut self) -> AppResult<()> {
        // ROLLBACK TO keeps the savepoint alive; release it so guards don't pile up
        sqlx::query("ROLLBACK TO SAVEPOINT import_row")
            .execute(&mut *self.tx)
            .await?;
        sqlx::query("RELEASE SAVEPOINT import_row")
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }
}
