use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Excerpt).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Image)
                            .string()
                            .not_null()
                            .default("/placeholder.svg"),
                    )
                    .col(ColumnDef::new(BlogPosts::Author).string().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlogPosts::Category).string().not_null())
                    .col(ColumnDef::new(BlogPosts::ReadTime).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Color).text().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Status)
                            .text()
                            .not_null()
                            .default("Draft"),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings sort by date and filter by status or category
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_date")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_status_category")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Status)
                    .col(BlogPosts::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Excerpt,
    Content,
    Image,
    Author,
    Date,
    Category,
    ReadTime,
    Color,
    Status,
    CreatedAt,
    UpdatedAt,
}
