//! Patch type service.
//!
//! Built-in types are seeded at startup and may only be enabled or disabled. Custom types are
//! created by the user and can additionally be edited and deleted as long as no application
//! references them.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::patch::PatchTypeDto,
    server::{
        data::{
            inventory::InventoryRepository, patch_application::PatchApplicationRepository,
            patch_type::PatchTypeRepository,
        },
        error::{patch::PatchError, Error},
        model::db::PatchTypeModel,
    },
};

/// Built-in patch types seeded into an empty database, as (name, wear duration in hours).
pub const DEFAULT_PATCH_TYPES: [(&str, f64); 4] = [
    ("Daily", 24.0),
    ("Every 3 days", 72.0),
    ("Twice weekly", 84.0),
    ("Weekly", 168.0),
];

/// Longest accepted wear duration, roughly 114 years
pub const MAX_DURATION_HOURS: f64 = 1_000_000.0;

impl From<PatchTypeModel> for PatchTypeDto {
    fn from(model: PatchTypeModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            duration_hours: model.duration_hours,
            enabled: model.enabled,
            custom: model.custom,
        }
    }
}

pub struct PatchTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatchTypeService<'a> {
    /// Creates a new instance of [`PatchTypeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all patch types, enabled or not, in creation order
    pub async fn get_patch_types(&self) -> Result<Vec<PatchTypeDto>, Error> {
        let patch_type_repo = PatchTypeRepository::new(self.db);

        Ok(patch_type_repo
            .get_all()
            .await?
            .into_iter()
            .map(PatchTypeDto::from)
            .collect())
    }

    /// Creates a custom patch type together with an empty inventory entry
    ///
    /// # Returns
    /// - `Ok(PatchTypeDto)` - The created patch type
    /// - `Err(Error::PatchError(PatchError::InvalidPatchType))` - Blank name or non-positive duration
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_patch_type(
        &self,
        name: &str,
        duration_hours: f64,
    ) -> Result<PatchTypeDto, Error> {
        let name = validate_patch_type(name, duration_hours)?;

        let txn = self.db.begin().await?;

        let patch_type = PatchTypeRepository::new(&txn)
            .create(name, duration_hours, true)
            .await?;
        InventoryRepository::new(&txn)
            .set_count(patch_type.id, 0)
            .await?;

        txn.commit().await?;

        tracing::info!(
            patch_type_id = patch_type.id,
            "Created custom patch type {:?} ({}h)",
            patch_type.name,
            patch_type.duration_hours
        );

        Ok(patch_type.into())
    }

    /// Edits the name and wear duration of a custom patch type
    ///
    /// # Returns
    /// - `Ok(PatchTypeDto)` - The updated patch type
    /// - `Err(Error::PatchError(PatchError::InvalidPatchType))` - Blank name or non-positive duration
    /// - `Err(Error::PatchError(PatchError::PatchTypeNotFound))` - No patch type with `id`
    /// - `Err(Error::PatchError(PatchError::PatchTypeNotCustom))` - The patch type is built-in
    pub async fn update_patch_type(
        &self,
        id: i32,
        name: &str,
        duration_hours: f64,
    ) -> Result<PatchTypeDto, Error> {
        let name = validate_patch_type(name, duration_hours)?;
        let patch_type_repo = PatchTypeRepository::new(self.db);

        ensure_custom(patch_type_repo.get_by_id(id).await?, id)?;

        let patch_type = patch_type_repo
            .update(id, name, duration_hours)
            .await?
            .ok_or(PatchError::PatchTypeNotFound(id))?;

        Ok(patch_type.into())
    }

    /// Enables or disables any patch type, built-in or custom
    pub async fn set_enabled(&self, id: i32, enabled: bool) -> Result<PatchTypeDto, Error> {
        let patch_type = PatchTypeRepository::new(self.db)
            .set_enabled(id, enabled)
            .await?
            .ok_or(PatchError::PatchTypeNotFound(id))?;

        Ok(patch_type.into())
    }

    /// Deletes a custom patch type and its inventory entry
    ///
    /// # Returns
    /// - `Ok(())` - The patch type was deleted
    /// - `Err(Error::PatchError(PatchError::PatchTypeNotFound))` - No patch type with `id`
    /// - `Err(Error::PatchError(PatchError::PatchTypeNotCustom))` - The patch type is built-in
    /// - `Err(Error::PatchError(PatchError::PatchTypeInUse))` - Applications still reference it
    pub async fn delete_patch_type(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let patch_type_repo = PatchTypeRepository::new(&txn);
        ensure_custom(patch_type_repo.get_by_id(id).await?, id)?;

        let applications = PatchApplicationRepository::new(&txn)
            .count_by_patch_type_id(id)
            .await?;
        if applications > 0 {
            return Err(PatchError::PatchTypeInUse(id).into());
        }

        InventoryRepository::new(&txn)
            .delete_by_patch_type_id(id)
            .await?;
        patch_type_repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!(patch_type_id = id, "Deleted custom patch type");

        Ok(())
    }

    /// Inserts the built-in patch types if no patch type exists yet
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of patch types seeded, 0 if the table was not empty
    pub async fn seed_default_patch_types(&self) -> Result<usize, Error> {
        if PatchTypeRepository::new(self.db).count().await? > 0 {
            return Ok(0);
        }

        let txn = self.db.begin().await?;

        let patch_type_repo = PatchTypeRepository::new(&txn);
        let inventory_repo = InventoryRepository::new(&txn);
        for (name, duration_hours) in DEFAULT_PATCH_TYPES {
            let patch_type = patch_type_repo
                .create(name.to_string(), duration_hours, false)
                .await?;
            inventory_repo.set_count(patch_type.id, 0).await?;
        }

        txn.commit().await?;

        Ok(DEFAULT_PATCH_TYPES.len())
    }
}

/// Trims the name and checks the wear duration is a positive number of hours no larger than
/// [`MAX_DURATION_HOURS`]
fn validate_patch_type(name: &str, duration_hours: f64) -> Result<String, PatchError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PatchError::InvalidPatchType("name must not be blank".to_string()));
    }

    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(PatchError::InvalidPatchType(format!(
            "duration must be a positive number of hours, got {}",
            duration_hours
        )));
    }

    if duration_hours > MAX_DURATION_HOURS {
        return Err(PatchError::InvalidPatchType(format!(
            "duration must not exceed {} hours, got {}",
            MAX_DURATION_HOURS, duration_hours
        )));
    }

    Ok(name.to_string())
}

fn ensure_custom(patch_type: Option<PatchTypeModel>, id: i32) -> Result<PatchTypeModel, PatchError> {
    match patch_type {
        None => Err(PatchError::PatchTypeNotFound(id)),
        Some(patch_type) if !patch_type.custom => Err(PatchError::PatchTypeNotCustom(id)),
        Some(patch_type) => Ok(patch_type),
    }
}
