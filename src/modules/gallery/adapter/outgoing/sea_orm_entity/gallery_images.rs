use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gallery_images")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "car_id", column_type = "Uuid")]
    pub car_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub image_url: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::car::adapter::outgoing::sea_orm_entity::cars::Entity",
        from = "Column::CarId",
        to = "crate::modules::car::adapter::outgoing::sea_orm_entity::cars::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cars,
}

impl Related<crate::modules::car::adapter::outgoing::sea_orm_entity::cars::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cars.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
