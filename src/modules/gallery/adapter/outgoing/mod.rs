pub mod gallery_query_postgres;
pub mod gallery_repository_postgres;
pub mod sea_orm_entity;
