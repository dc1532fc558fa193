// Per-frame simulation rules, free of I/O.

pub mod clouds;
pub mod collision;
pub mod flight;
