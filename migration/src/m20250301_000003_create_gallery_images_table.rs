use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GalleryImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(GalleryImages::CarId).uuid().not_null())
                    .col(ColumnDef::new(GalleryImages::ImageUrl).text().not_null())
                    .col(
                        ColumnDef::new(GalleryImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_images_car_id")
                            .from(GalleryImages::Table, GalleryImages::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-car lookups and the gallery feed both hit these
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_gallery_images_car_id
                ON gallery_images (car_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_gallery_images_created_at
                ON gallery_images (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_gallery_images_car_id;
                DROP INDEX IF EXISTS idx_gallery_images_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GalleryImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GalleryImages {
    Table,
    Id,
    CarId,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
}
