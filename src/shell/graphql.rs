// GraphQL surface at /gql. The calling actor comes from the same headers as
// the REST routes and is attached to each request's data.

use async_graphql::{Context, EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap, response::Html};
use tracing::{debug, error};

use crate::modules::timesheets::use_cases::correct_punch_pair::inbound::graphql::CorrectPunchPairMutationRoot;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::list_punches::inbound::graphql::ListPunchesQueryRoot;
use crate::modules::timesheets::use_cases::punch_stats::inbound::graphql::PunchStatsQueryRoot;
use crate::modules::timesheets::use_cases::register_punch::inbound::graphql::RegisterPunchMutationRoot;
use crate::shared::core::primitives::Actor;
use crate::shell::actor::actor_from_headers;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListPunchesQueryRoot, PunchStatsQueryRoot);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RegisterPunchMutationRoot, CorrectPunchPairMutationRoot);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn actor<'a>(context: &Context<'a>) -> async_graphql::Result<&'a Actor> {
    context.data_opt::<Actor>().ok_or_else(|| {
        async_graphql::Error::new("missing or invalid actor headers")
            .extend_with(|_, extensions| extensions.set("code", "UNAUTHENTICATED"))
    })
}

pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = match &error {
        ApplicationError::Validation(_) => "VALIDATION",
        ApplicationError::NotFound(_) => "NOT_FOUND",
        ApplicationError::Forbidden(_) => "FORBIDDEN",
        ApplicationError::Store(_) | ApplicationError::Directory(_) => {
            error!(%error, "graphql request failed");
            "INTERNAL"
        }
    };
    async_graphql::Error::new(error.reason()).extend_with(|_, extensions| extensions.set("code", code))
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    match actor_from_headers(&headers) {
        Ok(actor) => request = request.data(actor),
        Err(rejection) => debug!(%rejection, "graphql request without actor"),
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
