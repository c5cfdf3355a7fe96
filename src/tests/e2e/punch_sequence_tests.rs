use crate::modules::timesheets::adapters::outbound::punch_store::{PunchFilter, PunchStore};
use crate::modules::timesheets::core::punch::{Direction, alternates};
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::register_punch::command::RegisterPunch;
use crate::shared::core::primitives::Actor;
use crate::shell::state::AppState;
use crate::tests::fixtures::ports::TestPorts;
use crate::tests::fixtures::punches::BASE_TIME;
use rstest::rstest;

/// Small deterministic generator so every run replays the same sequences.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn offset(&mut self, max: i64) -> i64 {
        (self.next() % max as u64) as i64 - max / 4
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(1_234)]
#[tokio::test]
async fn accepted_creates_always_alternate_and_strictly_increase(#[case] seed: u64) {
    let ports = TestPorts::empty();
    let state = AppState::from_ports(&ports);
    let manager = Actor::manager("mgr-1");
    let mut rng = Lcg(seed);
    let mut cursor = BASE_TIME;
    let mut last_accepted: Option<i64> = None;

    for _ in 0..60 {
        // a quarter of the candidates land at or before the cursor
        cursor += rng.offset(4 * 60_000);
        let result = state
            .register_punch
            .handle(&manager, RegisterPunch::for_employee("emp-1").at(cursor))
            .await;

        match (result, last_accepted) {
            (Ok(punch), previous) => {
                assert!(previous.is_none_or(|previous| punch.timestamp > previous));
                last_accepted = Some(punch.timestamp);
            }
            (Err(ApplicationError::Validation(_)), Some(previous)) => assert!(cursor <= previous),
            (other, _) => panic!("unexpected outcome {other:?}"),
        }
    }

    let history = ports
        .store
        .list_punches(&PunchFilter::for_employee("emp-1"))
        .await
        .unwrap();
    assert!(!history.is_empty());
    assert_eq!(history[0].direction, Direction::Entry);
    assert!(alternates(&history));
    assert!(history.windows(2).all(|pair| pair[0].timestamp < pair[1].timestamp));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_across_employees_keep_every_sequence_alternating() {
    let ports = TestPorts::empty();
    ports.store.set_read_delay_ms(2);
    let state = AppState::from_ports(&ports);

    let mut tasks = Vec::new();
    for employee_id in ["emp-1", "emp-2", "emp-3"] {
        for n in 0..8_i64 {
            let state = state.clone();
            tasks.push(tokio::spawn(async move {
                let actor = Actor::admin("adm-1");
                let command = RegisterPunch::for_employee(employee_id).at(BASE_TIME + n * 60_000);
                state.register_punch.handle(&actor, command).await
            }));
        }
    }
    for task in tasks {
        // some fail chronology when a later timestamp won the race; that is fine
        let _ = task.await.unwrap();
    }

    for employee_id in ["emp-1", "emp-2", "emp-3"] {
        let history = ports
            .store
            .list_punches(&PunchFilter::for_employee(employee_id))
            .await
            .unwrap();
        assert!(!history.is_empty());
        assert!(alternates(&history), "{employee_id} broke alternation");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_self_service_punches_never_share_a_direction() {
    let ports = TestPorts::empty();
    ports.store.set_read_delay_ms(2);
    let state = AppState::from_ports(&ports);

    let mut tasks = Vec::new();
    for _ in 0..6 {
        let state = state.clone();
        let clock = ports.clock.clone();
        tasks.push(tokio::spawn(async move {
            clock.advance(1_000);
            state
                .register_punch
                .handle(&Actor::employee("emp-2"), RegisterPunch::for_self())
                .await
        }));
    }
    for task in tasks {
        let _ = task.await.unwrap();
    }

    let history = ports
        .store
        .list_punches(&PunchFilter::for_employee("emp-2"))
        .await
        .unwrap();
    assert!(alternates(&history));
}
