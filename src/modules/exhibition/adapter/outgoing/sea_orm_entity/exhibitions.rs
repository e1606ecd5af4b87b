use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exhibitions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub subtitle: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub text: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub main_image: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 200, nullable)]
    pub author: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 100, nullable)]
    pub date: Option<String>,

    /// 0 = current, 1..=999 = past rank, 1000 = archived
    pub position: i32,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub slug: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::exhibition_images::Entity")]
    ExhibitionImages,
}

impl Related<super::exhibition_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExhibitionImages.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
