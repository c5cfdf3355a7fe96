use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::core::stats::PunchStats;
use crate::modules::timesheets::use_cases::punch_stats::query::PunchStatsQuery;
use crate::shell::graphql::{actor, gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "PunchStats")]
pub struct GqlPunchStats {
    pub total: u64,
    pub entries: u64,
    pub exits: u64,
    pub normal: u64,
    pub delay: u64,
    pub incomplete: u64,
    pub worked_days: u64,
}

impl From<PunchStats> for GqlPunchStats {
    fn from(s: PunchStats) -> Self {
        Self {
            total: s.total,
            entries: s.entries,
            exits: s.exits,
            normal: s.by_status.normal,
            delay: s.by_status.delay,
            incomplete: s.by_status.incomplete,
            worked_days: s.worked_days,
        }
    }
}

#[derive(Default)]
pub struct PunchStatsQueryRoot;

#[Object]
impl PunchStatsQueryRoot {
    async fn punch_stats(
        &self,
        context: &Context<'_>,
        employee_id: String,
        start: i64,
        end: i64,
    ) -> GqlResult<GqlPunchStats> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;
        let stats = state
            .punch_stats
            .handle(actor, PunchStatsQuery { employee_id, start, end })
            .await
            .map_err(gql_error)?;
        Ok(stats.into())
    }
}
