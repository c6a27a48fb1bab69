use sea_orm::entity::prelude::*;

/// A member expected to RSVP for a guild's recurring session.
///
/// Unique per (guild_id, member_id); enforced by a migration-level index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roster_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub member_id: String,
    pub member_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
