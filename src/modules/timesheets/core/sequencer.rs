// Direction of an auto-created punch.
//
// The first punch of an employee is an entry; every later one flips the last
// punch's direction. The candidate timestamp is never inspected.

use crate::modules::timesheets::core::punch::{Direction, Punch};

pub fn next_direction(last_punch: Option<&Punch>) -> Direction {
    last_punch.map_or(Direction::Entry, |last| last.direction.flipped())
}
