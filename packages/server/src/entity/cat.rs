use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed, column_type = "String(StringLen::N(100))")]
    pub nickname: String,
    pub age: i32,
    #[sea_orm(default_value = false)]
    pub vaccinated: bool,
    #[sea_orm(column_type = "Text")]
    pub description: Option<String>,

    /// NULL only for rows written outside the API.
    pub owner_id: Option<i32>,
    #[sea_orm(belongs_to, from = "owner_id", to = "id")]
    pub owner: HasOne<super::owner::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
