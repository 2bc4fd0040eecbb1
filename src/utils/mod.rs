//! Various unsorted geometrical and logical operators.

pub use self::interval::Interval;
pub use self::sorted_pair::SortedPair;

mod interval;
mod sorted_pair;
