use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "user_id", column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub brand: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub model: String,

    pub year: i32,

    // Stored as text; parsed into CarCondition at the adapter boundary
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub condition: String,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // Ordered image path list, stored as JSONB
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    pub approved: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        has_many = "crate::modules::gallery::adapter::outgoing::sea_orm_entity::gallery_images::Entity"
    )]
    GalleryImages,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<crate::modules::gallery::adapter::outgoing::sea_orm_entity::gallery_images::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::GalleryImages.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(brand) = &self.brand {
            self.brand = Set(brand.trim().to_string());
        }

        if let ActiveValue::Set(model) = &self.model {
            self.model = Set(model.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
