use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "addr")]
    pub address: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted on create. Anything else in the body (id, timestamps) is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    #[serde(alias = "addr")]
    pub address: String,
}

/// Partial update: `None` leaves the stored column untouched, `Some("")` writes an empty string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "addr", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RestaurantUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }

    /// Apply present fields onto an existing row.
    pub fn apply_to(&self, model: &mut Model) {
        if let Some(name) = &self.name {
            model.name = name.clone();
        }
        if let Some(address) = &self.address {
            model.address = address.clone();
        }
    }
}

/// Insert a row and return the id assigned by the database.
pub async fn create(db: &DatabaseConnection, input: &RestaurantCreate) -> Result<i32, errors::ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        name: Set(input.name.clone()),
        address: Set(input.address.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let res = Entity::insert(am)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.last_insert_id)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Newest first; `id` is the sort key so pages stay stable.
pub async fn list_page(db: &DatabaseConnection, offset: u64, limit: u64) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_desc(Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Write only the fields present in `patch`. Returns the number of rows touched.
pub async fn update(db: &DatabaseConnection, id: i32, patch: &RestaurantUpdate) -> Result<u64, errors::ModelError> {
    if patch.is_empty() {
        return Ok(0);
    }
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut stmt = Entity::update_many().filter(Column::Id.eq(id));
    if let Some(name) = &patch.name {
        stmt = stmt.col_expr(Column::Name, Expr::value(name.clone()));
    }
    if let Some(address) = &patch.address {
        stmt = stmt.col_expr(Column::Address, Expr::value(address.clone()));
    }
    let res = stmt
        .col_expr(Column::UpdatedAt, Expr::value(now))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

/// Hard delete. Returns the number of rows removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
