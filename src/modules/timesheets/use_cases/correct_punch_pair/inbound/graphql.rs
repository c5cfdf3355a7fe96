use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::use_cases::correct_punch_pair::command::CorrectPunchPair;
use crate::modules::timesheets::use_cases::list_punches::inbound::graphql::GqlPunch;
use crate::shell::graphql::{actor, gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "PunchPair")]
pub struct GqlPunchPair {
    pub entry: GqlPunch,
    pub exit: GqlPunch,
}

#[derive(Default)]
pub struct CorrectPunchPairMutationRoot;

#[Object]
impl CorrectPunchPairMutationRoot {
    async fn correct_punch_pair(
        &self,
        context: &Context<'_>,
        entry_id: String,
        exit_id: String,
        entry_timestamp: i64,
        exit_timestamp: i64,
    ) -> GqlResult<GqlPunchPair> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;

        let command = CorrectPunchPair {
            entry_id,
            exit_id,
            entry_timestamp,
            exit_timestamp,
        };

        let pair = state
            .correct_punch_pair
            .handle(actor, command)
            .await
            .map_err(gql_error)?;
        Ok(GqlPunchPair {
            entry: pair.entry.into(),
            exit: pair.exit.into(),
        })
    }
}
