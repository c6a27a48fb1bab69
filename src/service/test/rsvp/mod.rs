use crate::data::{GuildConfigRepository, RsvpRepository};
use crate::model::{Member, RsvpList};
use crate::service::RsvpService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
