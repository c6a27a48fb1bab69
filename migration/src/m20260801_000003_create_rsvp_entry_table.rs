use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RsvpEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(RsvpEntry::Id))
                    .col(string(RsvpEntry::GuildId))
                    .col(string(RsvpEntry::List))
                    .col(string(RsvpEntry::MemberId))
                    .col(string(RsvpEntry::MemberName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-rsvp-entry-guild-list-member")
                    .table(RsvpEntry::Table)
                    .col(RsvpEntry::GuildId)
                    .col(RsvpEntry::List)
                    .col(RsvpEntry::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RsvpEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum RsvpEntry {
    Table,
    Id,
    GuildId,
    List,
    MemberId,
    MemberName,
}
