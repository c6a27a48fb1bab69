use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(string(GuildConfig::OrganizerId))
                    .col(string(GuildConfig::OrganizerName))
                    .col(string(GuildConfig::ChannelId))
                    .col(string_null(GuildConfig::VoiceChannelId))
                    .col(integer(GuildConfig::SessionWeekday))
                    .col(string(GuildConfig::SessionTime))
                    .col(integer(GuildConfig::FirstAlertWeekday))
                    .col(integer(GuildConfig::SecondAlertWeekday))
                    .col(boolean(GuildConfig::AlertsEnabled))
                    .col(boolean(GuildConfig::Cancelled))
                    .col(date_null(GuildConfig::LastAlertedOn))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    OrganizerId,
    OrganizerName,
    ChannelId,
    VoiceChannelId,
    SessionWeekday,
    SessionTime,
    FirstAlertWeekday,
    SecondAlertWeekday,
    AlertsEnabled,
    Cancelled,
    LastAlertedOn,
}
