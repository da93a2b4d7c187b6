use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerifiedEmails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerifiedEmails::Email)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VerifiedEmails::VerifiedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VerifiedEmails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VerifiedEmails {
    Table,
    Email,
    VerifiedAt,
}
