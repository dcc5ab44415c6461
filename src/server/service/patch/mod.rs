//! Patch application service.
//!
//! Applying a patch consumes one unit of stock, unapplying gives it back, and removing a patch
//! simply ends it. Each of these runs in a single transaction so the application record and
//! the inventory count never disagree.

#[cfg(test)]
mod tests;

use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{inventory::InventoryDto, patch::ApplyPatchDto},
    server::{
        data::{
            inventory::InventoryRepository, patch_application::PatchApplicationRepository,
            patch_type::PatchTypeRepository,
        },
        error::{patch::PatchError, Error},
        util::{
            lifecycle::{change_time, compute_active_patch, sort_active_patches, ActivePatch},
            location::suggest_next_location,
        },
    },
};

pub struct PatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatchService<'a> {
    /// Creates a new instance of [`PatchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every worn patch with its change schedule, soonest change first
    ///
    /// # Returns
    /// - `Ok(Vec<ActivePatch>)` - Active patches sorted by change time, ties in application order
    /// - `Err(Error::InternalError)` - An application references a missing patch type
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_active_patches(&self, now: NaiveDateTime) -> Result<Vec<ActivePatch>, Error> {
        let application_repo = PatchApplicationRepository::new(self.db);

        let mut active_patches = application_repo
            .get_all_with_patch_type()
            .await?
            .into_iter()
            .map(|(application, patch_type)| -> Result<ActivePatch, Error> {
                // Only possible if the foreign key on patch_type_id is not enforced
                let patch_type = patch_type.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find patch type ID {} for application ID {}",
                        application.patch_type_id, application.id
                    ))
                })?;

                compute_active_patch(application, patch_type, now)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        sort_active_patches(&mut active_patches);

        Ok(active_patches)
    }

    /// Applies a patch, consuming one unit of stock
    ///
    /// # Arguments
    /// - `request` - Patch type, body location, optional notes and optional application time
    /// - `now` - Used when no application time is given, later times are rejected
    ///
    /// # Returns
    /// - `Ok(ActivePatch)` - The new application with its change schedule at `now`
    /// - `Err(Error::PatchError(PatchError::InvalidApplication))` - Blank location, future time or
    ///   a change time outside the supported date range
    /// - `Err(Error::PatchError(PatchError::PatchTypeNotFound))` - Unknown patch type
    /// - `Err(Error::PatchError(PatchError::PatchTypeDisabled))` - Patch type is disabled
    /// - `Err(Error::PatchError(PatchError::NoStock))` - No units left, inventory is unchanged
    pub async fn apply_patch(
        &self,
        request: ApplyPatchDto,
        now: NaiveDateTime,
    ) -> Result<ActivePatch, Error> {
        let location = request.location.trim().to_string();
        if location.is_empty() {
            return Err(
                PatchError::InvalidApplication("location must not be blank".to_string()).into(),
            );
        }

        let applied_at = request.applied_at.unwrap_or(now);
        if applied_at > now {
            return Err(PatchError::InvalidApplication(
                "application time must not be in the future".to_string(),
            )
            .into());
        }

        let notes = request
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let patch_type_id = request.patch_type_id;

        let txn = self.db.begin().await?;

        let patch_type = PatchTypeRepository::new(&txn)
            .get_by_id(patch_type_id)
            .await?
            .ok_or(PatchError::PatchTypeNotFound(patch_type_id))?;
        if !patch_type.enabled {
            return Err(PatchError::PatchTypeDisabled(patch_type_id).into());
        }
        if change_time(applied_at, patch_type.duration_hours).is_none() {
            return Err(PatchError::InvalidApplication(
                "change time is outside the supported date range".to_string(),
            )
            .into());
        }

        // Conditional decrement, concurrent applies cannot both take the last unit
        if !InventoryRepository::new(&txn).take_one(patch_type_id).await? {
            return Err(PatchError::NoStock(patch_type_id).into());
        }

        let application = PatchApplicationRepository::new(&txn)
            .create(patch_type_id, applied_at, location, notes)
            .await?;

        txn.commit().await?;

        tracing::info!(
            application_id = application.id,
            patch_type_id,
            "Applied {} patch on {}",
            patch_type.name,
            application.location
        );

        compute_active_patch(application, patch_type, now)
    }

    /// Removes a worn patch without returning it to inventory
    ///
    /// # Returns
    /// - `Ok(())` - The application was deleted
    /// - `Err(Error::PatchError(PatchError::ApplicationNotFound))` - No application with `id`
    pub async fn remove_patch(&self, id: i32) -> Result<(), Error> {
        let result = PatchApplicationRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(PatchError::ApplicationNotFound(id).into());
        }

        tracing::info!(application_id = id, "Removed patch");

        Ok(())
    }

    /// Reverses an application: deletes it and restores one unit of stock
    ///
    /// # Returns
    /// - `Ok(InventoryDto)` - The inventory of the patch type after restocking
    /// - `Err(Error::PatchError(PatchError::ApplicationNotFound))` - No application with `id`
    pub async fn unapply_patch(&self, id: i32) -> Result<InventoryDto, Error> {
        let txn = self.db.begin().await?;

        let application_repo = PatchApplicationRepository::new(&txn);
        let application = application_repo
            .get_by_id(id)
            .await?
            .ok_or(PatchError::ApplicationNotFound(id))?;

        let patch_type = PatchTypeRepository::new(&txn)
            .get_by_id(application.patch_type_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find patch type ID {} for application ID {}",
                    application.patch_type_id, application.id
                ))
            })?;

        application_repo.delete(id).await?;
        let entry = InventoryRepository::new(&txn)
            .add_count(patch_type.id, 1)
            .await?;

        txn.commit().await?;

        tracing::info!(
            application_id = id,
            patch_type_id = patch_type.id,
            "Unapplied patch, {} now in stock",
            entry.count
        );

        Ok(InventoryDto {
            patch_type_id: patch_type.id,
            patch_type_name: patch_type.name,
            count: entry.count,
        })
    }

    /// Suggests the body location for the next patch based on the patches currently worn
    pub async fn suggest_location(&self) -> Result<String, Error> {
        let worn: Vec<_> = PatchApplicationRepository::new(self.db)
            .get_all_with_patch_type()
            .await?
            .into_iter()
            .map(|(application, _)| application)
            .collect();

        Ok(suggest_next_location(&worn).to_string())
    }
}
