use sea_orm::entity::prelude::*;

/// Membership of one guild member in one RSVP list.
///
/// `list` is one of the list names defined by the application (attendees,
/// decliners, dreamers, cancellers). Unique per (guild_id, list, member_id);
/// enforced by a migration-level index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rsvp_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub list: String,
    pub member_id: String,
    pub member_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
