use crate::data::GuildConfigRepository;
use crate::model::{Member, Unanswered};
use crate::service::RosterStatusService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod is_full_group;
mod reset;
mod unanswered;
