// Shared test fixtures, compiled into the crate only for tests.

pub mod directory;
pub mod punches;
pub mod ports;
