use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::core::punch::{Punch, PunchStatus};
use crate::modules::timesheets::use_cases::list_punches::query::ListPunches;
use crate::shell::graphql::{actor, gql_error};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "PunchStatus")]
pub enum GqlPunchStatus {
    Normal,
    Delay,
    Incomplete,
}

impl From<PunchStatus> for GqlPunchStatus {
    fn from(status: PunchStatus) -> Self {
        match status {
            PunchStatus::Normal => Self::Normal,
            PunchStatus::Delay => Self::Delay,
            PunchStatus::Incomplete => Self::Incomplete,
        }
    }
}

impl From<GqlPunchStatus> for PunchStatus {
    fn from(status: GqlPunchStatus) -> Self {
        match status {
            GqlPunchStatus::Normal => Self::Normal,
            GqlPunchStatus::Delay => Self::Delay,
            GqlPunchStatus::Incomplete => Self::Incomplete,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Punch")]
pub struct GqlPunch {
    pub id: String,
    pub employee_id: String,
    pub timestamp: i64,
    /// true for an entry, false for an exit.
    pub direction: bool,
    pub status: GqlPunchStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Punch> for GqlPunch {
    fn from(p: Punch) -> Self {
        Self {
            id: p.id,
            employee_id: p.employee_id,
            timestamp: p.timestamp,
            direction: p.direction.is_entry(),
            status: p.status.into(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Default)]
pub struct ListPunchesQueryRoot;

#[Object]
impl ListPunchesQueryRoot {
    async fn punches(
        &self,
        context: &Context<'_>,
        employee_id: String,
        from: Option<i64>,
        to: Option<i64>,
    ) -> GqlResult<Vec<GqlPunch>> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;
        let punches = state
            .list_punches
            .handle(actor, ListPunches { employee_id, from, to })
            .await
            .map_err(gql_error)?;
        Ok(punches.into_iter().map(Into::into).collect())
    }
}
