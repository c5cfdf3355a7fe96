use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::timesheets::use_cases::list_punches::inbound::graphql::{GqlPunch, GqlPunchStatus};
use crate::modules::timesheets::use_cases::register_punch::command::RegisterPunch;
use crate::shell::graphql::{actor, gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterPunchMutationRoot;

#[Object]
impl RegisterPunchMutationRoot {
    async fn register_punch(
        &self,
        context: &Context<'_>,
        employee_id: Option<String>,
        timestamp: Option<i64>,
        status: Option<GqlPunchStatus>,
    ) -> GqlResult<GqlPunch> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;

        let command = RegisterPunch {
            employee_id,
            timestamp,
            status: status.map(Into::into),
        };

        let punch = state
            .register_punch
            .handle(actor, command)
            .await
            .map_err(gql_error)?;
        Ok(punch.into())
    }
}
