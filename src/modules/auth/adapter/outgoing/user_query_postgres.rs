use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::modules::car::adapter::outgoing::sea_orm_entity::cars;

use super::sea_orm_entity::users::{self, Column, Entity as UserEntity};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(model_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let normalized = email.trim().to_lowercase();

        let user = UserEntity::find()
            .filter(Column::Email.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(model_to_user).transpose()
    }

    async fn car_count(&self, user_id: Uuid) -> Result<u64, UserQueryError> {
        cars::Entity::find()
            .filter(cars::Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}

pub(super) fn model_to_user(model: users::Model) -> Result<User, UserQueryError> {
    let role = UserRole::from_str(&model.role)
        .map_err(|e| UserQueryError::DatabaseError(format!("Corrupt role column: {}", e)))?;

    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role,
        phone: model.phone,
        address: model.address,
        business_name: model.business_name,
        business_type: model.business_type,
        license_number: model.license_number,
        is_verified: model.is_verified,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
