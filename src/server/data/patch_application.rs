use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{PatchApplicationModel, PatchTypeModel};

pub struct PatchApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PatchApplicationRepository<'a, C> {
    /// Creates a new instance of [`PatchApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a newly applied patch
    pub async fn create(
        &self,
        patch_type_id: i32,
        applied_at: NaiveDateTime,
        location: String,
        notes: Option<String>,
    ) -> Result<PatchApplicationModel, DbErr> {
        let application = entity::patch_application::ActiveModel {
            patch_type_id: ActiveValue::Set(patch_type_id),
            applied_at: ActiveValue::Set(applied_at),
            location: ActiveValue::Set(location),
            notes: ActiveValue::Set(notes),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PatchApplicationModel>, DbErr> {
        entity::prelude::PatchApplication::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Returns every application with its patch type, ordered by application ID
    pub async fn get_all_with_patch_type(
        &self,
    ) -> Result<Vec<(PatchApplicationModel, Option<PatchTypeModel>)>, DbErr> {
        entity::prelude::PatchApplication::find()
            .find_also_related(entity::patch_type::Entity)
            .order_by_asc(entity::patch_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts applications referencing a patch type
    pub async fn count_by_patch_type_id(&self, patch_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PatchApplication::find()
            .filter(entity::patch_application::Column::PatchTypeId.eq(patch_type_id))
            .count(self.db)
            .await
    }

    /// Deletes an application
    ///
    /// Returns OK regardless of the application existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PatchApplication::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
