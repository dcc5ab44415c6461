use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{InventoryEntryModel, PatchTypeModel};

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_patch_type_id(
        &self,
        patch_type_id: i32,
    ) -> Result<Option<InventoryEntryModel>, DbErr> {
        entity::prelude::InventoryEntry::find()
            .filter(entity::inventory_entry::Column::PatchTypeId.eq(patch_type_id))
            .one(self.db)
            .await
    }

    /// Returns every patch type paired with its inventory entry, ordered by patch type ID
    ///
    /// Patch types without an entry are returned with `None`.
    pub async fn get_all_with_patch_type(
        &self,
    ) -> Result<Vec<(PatchTypeModel, Option<InventoryEntryModel>)>, DbErr> {
        entity::prelude::PatchType::find()
            .find_also_related(entity::inventory_entry::Entity)
            .order_by_asc(entity::patch_type::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the stock count of a patch type, creating the entry if it does not exist yet
    ///
    /// Counts below zero are clamped to zero.
    pub async fn set_count(
        &self,
        patch_type_id: i32,
        count: i32,
    ) -> Result<InventoryEntryModel, DbErr> {
        let count = Ord::max(count, 0);
        let now = Utc::now().naive_utc();

        match self.get_by_patch_type_id(patch_type_id).await? {
            Some(entry) => {
                let mut entry_am = entry.into_active_model();
                entry_am.count = ActiveValue::Set(count);
                entry_am.updated_at = ActiveValue::Set(now);

                entry_am.update(self.db).await
            }
            None => {
                let entry = entity::inventory_entry::ActiveModel {
                    patch_type_id: ActiveValue::Set(patch_type_id),
                    count: ActiveValue::Set(count),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                entry.insert(self.db).await
            }
        }
    }

    /// Takes one unit out of a patch type's stock
    ///
    /// The decrement is a single conditional update, so concurrent callers can never take more
    /// units than are in stock.
    ///
    /// # Returns
    /// - `Ok(true)` - One unit was taken
    /// - `Ok(false)` - Stock is empty or the entry does not exist, nothing changed
    pub async fn take_one(&self, patch_type_id: i32) -> Result<bool, DbErr> {
        use entity::inventory_entry::Column;

        let result = entity::prelude::InventoryEntry::update_many()
            .col_expr(Column::Count, Expr::col(Column::Count).sub(1))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::PatchTypeId.eq(patch_type_id))
            .filter(Column::Count.gte(1))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds `amount` units to a patch type's stock in a single update
    ///
    /// A missing entry is created with `amount` units, clamped at zero.
    pub async fn add_count(
        &self,
        patch_type_id: i32,
        amount: i32,
    ) -> Result<InventoryEntryModel, DbErr> {
        use entity::inventory_entry::Column;

        let result = entity::prelude::InventoryEntry::update_many()
            .col_expr(Column::Count, Expr::col(Column::Count).add(amount))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::PatchTypeId.eq(patch_type_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return self.set_count(patch_type_id, amount).await;
        }

        self.get_by_patch_type_id(patch_type_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Inventory entry for patch type ID {} vanished after update",
                    patch_type_id
                ))
            })
    }

    /// Deletes the inventory entry of a patch type
    pub async fn delete_by_patch_type_id(&self, patch_type_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::InventoryEntry::delete_many()
            .filter(entity::inventory_entry::Column::PatchTypeId.eq(patch_type_id))
            .exec(self.db)
            .await
    }
}
