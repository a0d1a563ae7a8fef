// src/modules/admin/adapter/outgoing/admin_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::admin_query::{
    AdminQuery, AdminQueryError, AdminStatsView, AdminUserView, RecentCarView, RecentUserView,
    StatsOverview, UserSearchFilter,
};
use crate::auth::application::domain::entities::UserRole;
use crate::car::application::domain::entities::CarCondition;
use crate::car::application::ports::outgoing::car_query::CarOwnerView;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::car::adapter::outgoing::sea_orm_entity::cars;
use crate::shared::api::{PageRequest, PageResult};

const RECENT_ROWS: u64 = 5;

#[derive(Clone)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn car_counts_for(
        &self,
        user_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, u64>, AdminQueryError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts = cars::Entity::find()
            .select_only()
            .column(cars::Column::UserId)
            .column_as(Expr::col(cars::Column::Id).count(), "count")
            .filter(cars::Column::UserId.is_in(user_ids))
            .group_by(cars::Column::UserId)
            .into_tuple::<(Uuid, i64)>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(counts
            .into_iter()
            .map(|(user_id, count)| (user_id, count.max(0) as u64))
            .collect())
    }

    async fn recent_cars(&self) -> Result<Vec<RecentCarView>, AdminQueryError> {
        let models = cars::Entity::find()
            .order_by_desc(cars::Column::CreatedAt)
            .limit(RECENT_ROWS)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let user_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();
        let owners: HashMap<Uuid, CarOwnerView> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            users::Entity::find()
                .filter(users::Column::Id.is_in(user_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|u| {
                    (
                        u.id,
                        CarOwnerView {
                            id: u.id,
                            name: u.name,
                            email: u.email,
                        },
                    )
                })
                .collect()
        };

        models
            .into_iter()
            .map(|model| {
                let user = owners.get(&model.user_id).cloned().ok_or_else(|| {
                    AdminQueryError::DatabaseError(format!(
                        "Missing owner row for car {}",
                        model.id
                    ))
                })?;
                Ok(RecentCarView {
                    id: model.id,
                    brand: model.brand,
                    model: model.model,
                    year: model.year,
                    condition: parse_condition(&model.condition)?,
                    price: model.price,
                    approved: model.approved,
                    user,
                    created_at: model.created_at.into(),
                })
            })
            .collect()
    }

    async fn recent_users(&self) -> Result<Vec<RecentUserView>, AdminQueryError> {
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .limit(RECENT_ROWS)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let counts = self
            .car_counts_for(models.iter().map(|m| m.id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|model| RecentUserView {
                car_count: counts.get(&model.id).copied().unwrap_or(0),
                id: model.id,
                name: model.name,
                email: model.email,
                created_at: model.created_at.into(),
            })
            .collect())
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn stats(&self) -> Result<AdminStatsView, AdminQueryError> {
        let total_users = users::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let total_cars = cars::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let approved_cars = cars::Entity::find()
            .filter(cars::Column::Approved.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let pending_cars = total_cars.saturating_sub(approved_cars);

        let total_revenue = cars::Entity::find()
            .select_only()
            .column_as(Expr::col(cars::Column::Price).sum(), "total")
            .filter(cars::Column::Approved.eq(true))
            .into_tuple::<Option<f64>>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .flatten()
            .unwrap_or(0.0);

        let recent_cars = self.recent_cars().await?;
        let recent_users = self.recent_users().await?;

        Ok(AdminStatsView {
            overview: StatsOverview {
                total_users,
                total_cars,
                approved_cars,
                pending_cars,
                total_revenue,
            },
            recent_cars,
            recent_users,
        })
    }

    async fn list_users(
        &self,
        filter: UserSearchFilter,
        page: PageRequest,
    ) -> Result<PageResult<AdminUserView>, AdminQueryError> {
        let mut query = users::Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(users::Column::Name).ilike(&pattern))
                    .add(Expr::col(users::Column::Email).ilike(&pattern)),
            );
        }

        let query = query.order_by_desc(users::Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let counts = self
            .car_counts_for(models.iter().map(|m| m.id).collect())
            .await?;

        let items: Result<Vec<AdminUserView>, AdminQueryError> = models
            .into_iter()
            .map(|model| {
                Ok(AdminUserView {
                    car_count: counts.get(&model.id).copied().unwrap_or(0),
                    role: parse_role(&model.role)?,
                    id: model.id,
                    name: model.name,
                    email: model.email,
                    is_verified: model.is_verified,
                    created_at: model.created_at.into(),
                })
            })
            .collect();

        Ok(PageResult {
            items: items?,
            page: page.page,
            limit: page.limit,
            total,
        })
    }
}

fn map_db_err(e: DbErr) -> AdminQueryError {
    AdminQueryError::DatabaseError(e.to_string())
}

fn parse_role(value: &str) -> Result<UserRole, AdminQueryError> {
    UserRole::from_str(value)
        .map_err(|e| AdminQueryError::DatabaseError(format!("Corrupt role column: {}", e)))
}

fn parse_condition(value: &str) -> Result<CarCondition, AdminQueryError> {
    CarCondition::from_str(value)
        .map_err(|e| AdminQueryError::DatabaseError(format!("Corrupt condition column: {}", e)))
}
