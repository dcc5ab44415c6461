//! Inventory service.
//!
//! Only enabled patch types are surfaced. A patch type without an inventory entry is reported
//! with a count of zero.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::inventory::{InventoryAlertDto, InventoryDto},
    server::{
        data::{inventory::InventoryRepository, patch_type::PatchTypeRepository},
        error::{patch::PatchError, Error},
        util::lifecycle::low_inventory_alert,
    },
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the stock of every enabled patch type, ordered by patch type ID
    pub async fn get_inventory(&self) -> Result<Vec<InventoryDto>, Error> {
        let inventory_repo = InventoryRepository::new(self.db);

        Ok(inventory_repo
            .get_all_with_patch_type()
            .await?
            .into_iter()
            .filter(|(patch_type, _)| patch_type.enabled)
            .map(|(patch_type, entry)| InventoryDto {
                patch_type_id: patch_type.id,
                patch_type_name: patch_type.name,
                count: entry.map(|entry| entry.count).unwrap_or(0),
            })
            .collect())
    }

    /// Returns low and out of stock warnings for enabled patch types
    ///
    /// # Arguments
    /// - `threshold` - Counts at or below this value (but above zero) are reported as low
    pub async fn get_alerts(&self, threshold: i32) -> Result<Vec<InventoryAlertDto>, Error> {
        Ok(self
            .get_inventory()
            .await?
            .into_iter()
            .filter_map(|inventory| {
                let status = low_inventory_alert(inventory.count, threshold);

                status.needs_attention().then(|| InventoryAlertDto {
                    patch_type_id: inventory.patch_type_id,
                    patch_type_name: inventory.patch_type_name,
                    count: inventory.count,
                    is_low: status.is_low,
                    is_out: status.is_out,
                })
            })
            .collect())
    }

    /// Overwrites the stock count of a patch type
    ///
    /// # Returns
    /// - `Ok(InventoryDto)` - The updated inventory
    /// - `Err(Error::PatchError(PatchError::InvalidInventoryCount))` - `count` is negative
    /// - `Err(Error::PatchError(PatchError::PatchTypeNotFound))` - Unknown patch type
    pub async fn set_count(&self, patch_type_id: i32, count: i32) -> Result<InventoryDto, Error> {
        if count < 0 {
            return Err(PatchError::InvalidInventoryCount(count).into());
        }

        let txn = self.db.begin().await?;

        let patch_type = PatchTypeRepository::new(&txn)
            .get_by_id(patch_type_id)
            .await?
            .ok_or(PatchError::PatchTypeNotFound(patch_type_id))?;
        let entry = InventoryRepository::new(&txn)
            .set_count(patch_type_id, count)
            .await?;

        txn.commit().await?;

        tracing::debug!(patch_type_id, "Inventory of {} set to {}", patch_type.name, entry.count);

        Ok(InventoryDto {
            patch_type_id,
            patch_type_name: patch_type.name,
            count: entry.count,
        })
    }

    /// Adds `amount` units to the stock of a patch type
    ///
    /// The addition is applied by the database, concurrent restocks and applies are not lost.
    ///
    /// # Returns
    /// - `Ok(InventoryDto)` - The updated inventory
    /// - `Err(Error::PatchError(PatchError::InvalidInventoryCount))` - `amount` is not positive
    /// - `Err(Error::PatchError(PatchError::PatchTypeNotFound))` - Unknown patch type
    pub async fn restock(&self, patch_type_id: i32, amount: i32) -> Result<InventoryDto, Error> {
        if amount <= 0 {
            return Err(PatchError::InvalidInventoryCount(amount).into());
        }

        let txn = self.db.begin().await?;

        let patch_type = PatchTypeRepository::new(&txn)
            .get_by_id(patch_type_id)
            .await?
            .ok_or(PatchError::PatchTypeNotFound(patch_type_id))?;
        let entry = InventoryRepository::new(&txn)
            .add_count(patch_type_id, amount)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            patch_type_id,
            "Restocked {} {} patch(es), {} in stock",
            amount,
            patch_type.name,
            entry.count
        );

        Ok(InventoryDto {
            patch_type_id,
            patch_type_name: patch_type.name,
            count: entry.count,
        })
    }
}
