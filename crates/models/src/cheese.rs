use sea_orm::{
    entity::prelude::*, sea_query::OnConflict, ActiveValue::NotSet, DatabaseConnection, QueryOrder,
    Set,
};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Open record: everything besides the generated key lives in `fields`
/// and is flattened on the wire, so payloads round-trip unchanged.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cheese")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[serde(flatten)]
    pub fields: Json,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// All cheeses, oldest first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Persist a cheese. Without an id the store assigns the next key;
/// with an id the stored row is replaced (insert-or-replace on the key).
pub async fn save(
    db: &DatabaseConnection,
    id: Option<i64>,
    fields: Json,
) -> Result<Model, errors::ModelError> {
    match id {
        None => {
            let am = ActiveModel { id: NotSet, fields: Set(fields) };
            am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
        }
        Some(id) => {
            let am = ActiveModel { id: Set(id), fields: Set(fields) };
            Entity::insert(am)
                .on_conflict(
                    OnConflict::column(Column::Id)
                        .update_column(Column::Fields)
                        .to_owned(),
                )
                .exec_with_returning(db)
                .await
                .map_err(|e| errors::ModelError::Db(e.to_string()))
        }
    }
}
