use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exhibition_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub exhibition_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub url: String,

    pub image_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exhibitions::Entity",
        from = "Column::ExhibitionId",
        to = "super::exhibitions::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Exhibitions,
}

impl Related<super::exhibitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exhibitions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
