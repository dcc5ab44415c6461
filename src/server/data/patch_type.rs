use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryOrder,
};

use crate::server::model::db::PatchTypeModel;

pub struct PatchTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PatchTypeRepository<'a, C> {
    /// Creates a new instance of [`PatchTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new patch type
    pub async fn create(
        &self,
        name: String,
        duration_hours: f64,
        custom: bool,
    ) -> Result<PatchTypeModel, DbErr> {
        let patch_type = entity::patch_type::ActiveModel {
            name: ActiveValue::Set(name),
            duration_hours: ActiveValue::Set(duration_hours),
            enabled: ActiveValue::Set(true),
            custom: ActiveValue::Set(custom),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        patch_type.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PatchTypeModel>, DbErr> {
        entity::prelude::PatchType::find_by_id(id).one(self.db).await
    }

    /// Returns all patch types ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PatchTypeModel>, DbErr> {
        entity::prelude::PatchType::find()
            .order_by_asc(entity::patch_type::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::PatchType::find().count(self.db).await
    }

    /// Updates name & wear duration, returns `None` if the patch type does not exist
    pub async fn update(
        &self,
        id: i32,
        name: String,
        duration_hours: f64,
    ) -> Result<Option<PatchTypeModel>, DbErr> {
        let patch_type = match self.get_by_id(id).await? {
            Some(patch_type) => patch_type,
            None => return Ok(None),
        };

        let mut patch_type_am = patch_type.into_active_model();
        patch_type_am.name = ActiveValue::Set(name);
        patch_type_am.duration_hours = ActiveValue::Set(duration_hours);

        Ok(Some(patch_type_am.update(self.db).await?))
    }

    /// Sets the enabled flag, returns `None` if the patch type does not exist
    pub async fn set_enabled(
        &self,
        id: i32,
        enabled: bool,
    ) -> Result<Option<PatchTypeModel>, DbErr> {
        let patch_type = match self.get_by_id(id).await? {
            Some(patch_type) => patch_type,
            None => return Ok(None),
        };

        let mut patch_type_am = patch_type.into_active_model();
        patch_type_am.enabled = ActiveValue::Set(enabled);

        Ok(Some(patch_type_am.update(self.db).await?))
    }

    /// Deletes a patch type
    ///
    /// Returns OK regardless of the patch type existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PatchType::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
