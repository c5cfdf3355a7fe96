use crate::modules::timesheets::adapters::outbound::punch_store::{PunchFilter, PunchStore};
use crate::modules::timesheets::core::stats::{PunchStats, aggregate};
use crate::modules::timesheets::use_cases::access::authorize_employee;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::punch_stats::query::PunchStatsQuery;
use crate::shared::core::primitives::Actor;
use crate::shared::infrastructure::user_directory::UserDirectory;
use chrono::FixedOffset;
use std::sync::Arc;
use tracing::debug;

pub struct PunchStatsHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    /// Offset used to bucket punches into calendar days.
    utc_offset: FixedOffset,
}

impl<TStore, TDirectory> PunchStatsHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>, utc_offset: FixedOffset) -> Self {
        Self {
            store,
            directory,
            utc_offset,
        }
    }

    pub async fn handle(&self, actor: &Actor, query: PunchStatsQuery) -> Result<PunchStats, ApplicationError> {
        if query.start > query.end {
            return Err(ApplicationError::validation("start must not be after end"));
        }
        authorize_employee(&*self.directory, actor, &query.employee_id).await?;

        let punches = self
            .store
            .list_punches(
                &PunchFilter::for_employee(&query.employee_id).between(Some(query.start), Some(query.end)),
            )
            .await?;
        let stats = aggregate(&punches, query.start, query.end, &self.utc_offset);
        debug!(employee_id = %query.employee_id, total = stats.total, "punch stats computed");
        Ok(stats)
    }
}

#[cfg(test)]
mod punch_stats_handler_tests {
    use super::*;
    use crate::modules::timesheets::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
    use crate::modules::timesheets::core::punch::{Direction, PunchStatus};
    use crate::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
    use crate::tests::fixtures::ports::TestPorts;
    use crate::tests::fixtures::punches::PunchBuilder;
    use rstest::{fixture, rstest};

    const DAY: i64 = 86_400_000;
    // 2023-11-14T00:00:00Z
    const MIDNIGHT: i64 = 1_699_920_000_000;

    fn handler(ports: &TestPorts) -> PunchStatsHandler<InMemoryPunchStore, InMemoryUserDirectory> {
        PunchStatsHandler::new(
            ports.store.clone(),
            ports.directory.clone(),
            FixedOffset::east_opt(0).expect("zero offset"),
        )
    }

    fn query(start: i64, end: i64) -> PunchStatsQuery {
        PunchStatsQuery {
            employee_id: "emp-1".into(),
            start,
            end,
        }
    }

    #[fixture]
    async fn ports() -> TestPorts {
        let store = InMemoryPunchStore::new();
        let history = [
            ("a", MIDNIGHT + 8 * 3_600_000, Direction::Entry, PunchStatus::Delay),
            ("b", MIDNIGHT + 17 * 3_600_000, Direction::Exit, PunchStatus::Normal),
            ("c", MIDNIGHT + DAY + 8 * 3_600_000, Direction::Entry, PunchStatus::Normal),
            ("d", MIDNIGHT + 2 * DAY + 8 * 3_600_000, Direction::Exit, PunchStatus::Incomplete),
        ];
        for (id, timestamp, direction, status) in history {
            store
                .insert(
                    PunchBuilder::new()
                        .id(id)
                        .timestamp(timestamp)
                        .direction(direction)
                        .status(status)
                        .created_at(timestamp)
                        .build(),
                )
                .await;
        }
        TestPorts::new(store)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fold_the_window(#[future] ports: TestPorts) {
        let ports = ports.await;
        let stats = handler(&ports)
            .handle(&Actor::manager("mgr-1"), query(MIDNIGHT, MIDNIGHT + 2 * DAY - 1))
            .await
            .expect("handle failed");

        assert_eq!(stats.total, 3);
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.exits, 1);
        assert_eq!(stats.by_status.delay, 1);
        assert_eq!(stats.by_status.normal, 2);
        assert_eq!(stats.by_status.incomplete, 0);
        assert_eq!(stats.worked_days, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_inverted_window(#[future] ports: TestPorts) {
        let ports = ports.await;
        let result = handler(&ports)
            .handle(&Actor::admin("adm-1"), query(MIDNIGHT + DAY, MIDNIGHT))
            .await;
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_forbid_peers(#[future] ports: TestPorts) {
        let ports = ports.await;
        let result = handler(&ports)
            .handle(&Actor::employee("emp-2"), query(MIDNIGHT, MIDNIGHT + DAY))
            .await;
        assert!(matches!(result, Err(ApplicationError::Forbidden(reason)) if reason == "not own resource"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_zeroes_for_an_empty_window(#[future] ports: TestPorts) {
        let ports = ports.await;
        let stats = handler(&ports)
            .handle(&Actor::employee("emp-1"), query(MIDNIGHT - DAY, MIDNIGHT - 1))
            .await
            .expect("handle failed");
        assert_eq!(stats, PunchStats::default());
    }
}
