use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Empty when the uploader gave none.
    #[sea_orm(column_type = "Text")]
    pub caption: String,

    /// Public URL on the image host.
    pub url: String,

    /// "image" or "video".
    pub file_type: String,

    /// File name assigned by the image host.
    pub file_name: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
