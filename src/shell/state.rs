use crate::modules::timesheets::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
use crate::modules::timesheets::use_cases::correct_punch_pair::handler::PairCorrectionCoordinator;
use crate::modules::timesheets::use_cases::delete_punch::handler::DeletePunchHandler;
use crate::modules::timesheets::use_cases::list_punches::handler::ListPunchesHandler;
use crate::modules::timesheets::use_cases::punch_stats::handler::PunchStatsHandler;
use crate::modules::timesheets::use_cases::register_punch::handler::RegisterPunchHandler;
use crate::modules::timesheets::use_cases::update_punch::handler::UpdatePunchHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::employee_locks::EmployeeLocks;
use crate::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
use chrono::FixedOffset;
use std::sync::Arc;

type Store = InMemoryPunchStore;
type Directory = InMemoryUserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub register_punch: Arc<RegisterPunchHandler<Store, Directory>>,
    pub update_punch: Arc<UpdatePunchHandler<Store, Directory>>,
    pub correct_punch_pair: Arc<PairCorrectionCoordinator<Store, Directory>>,
    pub delete_punch: Arc<DeletePunchHandler<Store, Directory>>,
    pub list_punches: Arc<ListPunchesHandler<Store, Directory>>,
    pub punch_stats: Arc<PunchStatsHandler<Store, Directory>>,
}

impl AppState {
    /// Wires every use case over one set of ports. All writers share `locks`.
    pub fn new(
        store: Arc<Store>,
        directory: Arc<Directory>,
        clock: Arc<dyn Clock>,
        utc_offset: FixedOffset,
    ) -> Self {
        let locks = Arc::new(EmployeeLocks::new());
        Self::with_locks(store, directory, clock, locks, utc_offset)
    }

    pub fn with_locks(
        store: Arc<Store>,
        directory: Arc<Directory>,
        clock: Arc<dyn Clock>,
        locks: Arc<EmployeeLocks>,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            register_punch: Arc::new(RegisterPunchHandler::new(
                store.clone(),
                directory.clone(),
                locks.clone(),
                clock.clone(),
            )),
            update_punch: Arc::new(UpdatePunchHandler::new(
                store.clone(),
                directory.clone(),
                locks.clone(),
                clock.clone(),
            )),
            correct_punch_pair: Arc::new(PairCorrectionCoordinator::new(
                store.clone(),
                directory.clone(),
                locks.clone(),
                clock,
            )),
            delete_punch: Arc::new(DeletePunchHandler::new(store.clone(), directory.clone(), locks)),
            list_punches: Arc::new(ListPunchesHandler::new(store.clone(), directory.clone())),
            punch_stats: Arc::new(PunchStatsHandler::new(store, directory, utc_offset)),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// UTC state over the test ports, sharing their locks and clock.
    pub fn from_ports(ports: &crate::tests::fixtures::ports::TestPorts) -> Self {
        Self::with_locks(
            ports.store.clone(),
            ports.directory.clone(),
            ports.clock.clone(),
            ports.locks.clone(),
            FixedOffset::east_opt(0).expect("zero offset"),
        )
    }
}
