use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryItem::Id))
                    .col(string(InventoryItem::GuildId))
                    .col(string(InventoryItem::MemberId))
                    .col(string(InventoryItem::Item))
                    .col(integer(InventoryItem::Qty))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-inventory-item-guild-member-item")
                    .table(InventoryItem::Table)
                    .col(InventoryItem::GuildId)
                    .col(InventoryItem::MemberId)
                    .col(InventoryItem::Item)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum InventoryItem {
    Table,
    Id,
    GuildId,
    MemberId,
    Item,
    Qty,
}
