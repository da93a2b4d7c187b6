use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CartItems::ItemNo)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CartItems::CustEmail).string().not_null())
                    .col(ColumnDef::new(CartItems::CustName).string().not_null())
                    .col(ColumnDef::new(CartItems::CustMob).string().not_null())
                    .col(ColumnDef::new(CartItems::ProductNo).string().not_null())
                    .col(ColumnDef::new(CartItems::ProductName).string().not_null())
                    .col(ColumnDef::new(CartItems::Quantity).integer().not_null())
                    .col(ColumnDef::new(CartItems::UnitPrice).double().not_null())
                    .col(ColumnDef::new(CartItems::TotalCost).double().not_null())
                    .col(
                        ColumnDef::new(CartItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CartItems::Table)
                    .col(CartItems::CustEmail)
                    .name("idx_cart_items_cust_email")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CartItems {
    Table,
    ItemNo,
    CustEmail,
    CustName,
    CustMob,
    ProductNo,
    ProductName,
    Quantity,
    UnitPrice,
    TotalCost,
    CreatedAt,
}
