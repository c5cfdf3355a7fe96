use crate::modules::timesheets::adapters::outbound::punch_store::{PunchFilter, PunchStore};
use crate::modules::timesheets::core::punch::{Direction, PunchStatus, alternates};
use crate::modules::timesheets::use_cases::correct_punch_pair::command::CorrectPunchPair;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::list_punches::query::ListPunches;
use crate::modules::timesheets::use_cases::punch_stats::query::PunchStatsQuery;
use crate::modules::timesheets::use_cases::register_punch::command::RegisterPunch;
use crate::modules::timesheets::use_cases::update_punch::command::UpdatePunch;
use crate::shared::core::primitives::Actor;
use crate::shell::state::AppState;
use crate::tests::fixtures::ports::TestPorts;
use crate::tests::fixtures::punches::BASE_TIME;

const HOUR: i64 = 3_600_000;

#[tokio::test]
async fn a_working_day_from_first_punch_to_stats() {
    let ports = TestPorts::empty();
    let state = AppState::from_ports(&ports);
    let employee = Actor::employee("emp-1");
    let manager = Actor::manager("mgr-1");

    // morning: self-service entry and exit at server time
    ports.clock.set(BASE_TIME + 8 * HOUR);
    let first = state
        .register_punch
        .handle(&employee, RegisterPunch::for_self())
        .await
        .unwrap();
    assert_eq!(first.direction, Direction::Entry);

    ports.clock.set(BASE_TIME + 12 * HOUR);
    let second = state
        .register_punch
        .handle(&employee, RegisterPunch::for_self())
        .await
        .unwrap();
    assert_eq!(second.direction, Direction::Exit);

    // afternoon: the manager back-fills a late entry and an exit
    ports.clock.set(BASE_TIME + 20 * HOUR);
    let third = state
        .register_punch
        .handle(
            &manager,
            RegisterPunch::for_employee("emp-1")
                .at(BASE_TIME + 13 * HOUR)
                .with_status(PunchStatus::Delay),
        )
        .await
        .unwrap();
    let fourth = state
        .register_punch
        .handle(&manager, RegisterPunch::for_employee("emp-1").at(BASE_TIME + 17 * HOUR))
        .await
        .unwrap();
    assert_eq!(third.direction, Direction::Entry);
    assert_eq!(fourth.direction, Direction::Exit);

    // the morning pair was actually 08:30-12:15
    let pair = state
        .correct_punch_pair
        .handle(
            &manager,
            CorrectPunchPair {
                entry_id: first.id.clone(),
                exit_id: second.id.clone(),
                entry_timestamp: BASE_TIME + 8 * HOUR + HOUR / 2,
                exit_timestamp: BASE_TIME + 12 * HOUR + HOUR / 4,
            },
        )
        .await
        .unwrap();
    assert_eq!(pair.entry.timestamp, BASE_TIME + 8 * HOUR + HOUR / 2);

    // the employee nudges the last exit by ten minutes
    let fourth = state
        .update_punch
        .handle(
            &employee,
            UpdatePunch {
                punch_id: fourth.id.clone(),
                timestamp: Some(BASE_TIME + 17 * HOUR + HOUR / 6),
                status: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(fourth.direction, Direction::Exit);

    let listed = state
        .list_punches
        .handle(
            &employee,
            ListPunches {
                employee_id: "emp-1".into(),
                ..ListPunches::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(listed.len(), 4);
    assert!(alternates(&listed));

    let stats = state
        .punch_stats
        .handle(
            &manager,
            PunchStatsQuery {
                employee_id: "emp-1".into(),
                start: BASE_TIME,
                end: BASE_TIME + 24 * HOUR,
            },
        )
        .await
        .unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.exits, 2);
    assert_eq!(stats.by_status.delay, 1);

    // a manager removes the back-filled pair; employees cannot
    let denied = state.delete_punch.handle(&employee, &fourth.id).await;
    assert!(matches!(denied, Err(ApplicationError::Forbidden(_))));
    state.delete_punch.handle(&manager, &fourth.id).await.unwrap();
    state.delete_punch.handle(&manager, &third.id).await.unwrap();

    let remaining = ports
        .store
        .list_punches(&PunchFilter::for_employee("emp-1"))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(alternates(&remaining));
}

#[tokio::test]
async fn scenario_d_and_e_are_rejected_without_writes() {
    let ports = TestPorts::empty();
    let state = AppState::from_ports(&ports);
    let admin = Actor::admin("adm-1");

    let mut ids = Vec::new();
    for hour in [9, 10, 11] {
        let punch = state
            .register_punch
            .handle(&admin, RegisterPunch::for_employee("emp-3").at(BASE_TIME + hour * HOUR))
            .await
            .unwrap();
        ids.push(punch.id);
    }
    let before = ports
        .store
        .list_punches(&PunchFilter::for_employee("emp-3"))
        .await
        .unwrap();

    // exit before entry
    let pair = state
        .correct_punch_pair
        .handle(
            &admin,
            CorrectPunchPair {
                entry_id: ids[0].clone(),
                exit_id: ids[1].clone(),
                entry_timestamp: BASE_TIME + 10 * HOUR,
                exit_timestamp: BASE_TIME + 9 * HOUR,
            },
        )
        .await;
    assert!(matches!(pair, Err(ApplicationError::Validation(_))));

    // edit onto the successor's timestamp
    let edit = state
        .update_punch
        .handle(
            &admin,
            UpdatePunch {
                punch_id: ids[1].clone(),
                timestamp: Some(BASE_TIME + 11 * HOUR),
                status: None,
            },
        )
        .await;
    assert!(matches!(edit, Err(ApplicationError::Validation(reason)) if reason == "timestamp follows an existing later punch"));

    let after = ports
        .store
        .list_punches(&PunchFilter::for_employee("emp-3"))
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn ownership_is_enforced_on_every_operation() {
    let ports = TestPorts::empty();
    let state = AppState::from_ports(&ports);
    let punch = state
        .register_punch
        .handle(&Actor::employee("emp-3"), RegisterPunch::for_self())
        .await
        .unwrap();
    let outsider = Actor::manager("mgr-1");

    let create = state
        .register_punch
        .handle(&outsider, RegisterPunch::for_employee("emp-3"))
        .await;
    let update = state
        .update_punch
        .handle(
            &outsider,
            UpdatePunch {
                punch_id: punch.id.clone(),
                timestamp: None,
                status: Some(PunchStatus::Delay),
            },
        )
        .await;
    let delete = state.delete_punch.handle(&outsider, &punch.id).await;
    let list = state
        .list_punches
        .handle(
            &outsider,
            ListPunches {
                employee_id: "emp-3".into(),
                ..ListPunches::default()
            },
        )
        .await;
    let stats = state
        .punch_stats
        .handle(
            &outsider,
            PunchStatsQuery {
                employee_id: "emp-3".into(),
                start: 0,
                end: BASE_TIME * 2,
            },
        )
        .await;

    assert!(matches!(create, Err(ApplicationError::Forbidden(_))));
    assert!(matches!(update, Err(ApplicationError::Forbidden(_))));
    assert!(matches!(delete, Err(ApplicationError::Forbidden(_))));
    assert!(matches!(list, Err(ApplicationError::Forbidden(_))));
    assert!(matches!(stats, Err(ApplicationError::Forbidden(_))));
}
