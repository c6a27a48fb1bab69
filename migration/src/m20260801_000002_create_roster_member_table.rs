use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterMember::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterMember::Id))
                    .col(string(RosterMember::GuildId))
                    .col(string(RosterMember::MemberId))
                    .col(string(RosterMember::MemberName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-roster-member-guild-member")
                    .table(RosterMember::Table)
                    .col(RosterMember::GuildId)
                    .col(RosterMember::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RosterMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum RosterMember {
    Table,
    Id,
    GuildId,
    MemberId,
    MemberName,
}
