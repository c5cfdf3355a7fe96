use crate::modules::timesheets::adapters::outbound::punch_store::{PunchFilter, PunchStore};
use crate::modules::timesheets::core::punch::Punch;
use crate::modules::timesheets::use_cases::access::authorize_employee;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::list_punches::query::ListPunches;
use crate::shared::core::primitives::Actor;
use crate::shared::infrastructure::user_directory::UserDirectory;
use std::sync::Arc;

pub struct ListPunchesHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
}

impl<TStore, TDirectory> ListPunchesHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn handle(&self, actor: &Actor, query: ListPunches) -> Result<Vec<Punch>, ApplicationError> {
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from > to {
                return Err(ApplicationError::validation("from must not be after to"));
            }
        }
        authorize_employee(&*self.directory, actor, &query.employee_id).await?;

        let filter = PunchFilter::for_employee(query.employee_id).between(query.from, query.to);
        Ok(self.store.list_punches(&filter).await?)
    }
}
