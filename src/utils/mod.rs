//! Numeric tools shared by all the distance queries.

pub use self::finite_difference::DifferenceStep;
pub use self::interval::Interval;
pub use self::root_finding::{find_root_bracketed, Root, RootStatus};

mod finite_difference;
mod interval;
mod root_finding;
