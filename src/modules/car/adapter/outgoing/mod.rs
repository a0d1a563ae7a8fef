pub mod car_query_postgres;
pub mod car_repository_postgres;
pub mod sea_orm_entity;
