//! Demo components.
//!
//! The reusable list components live in `mdclist-ui`; this is the
//! controller side that drives them.

mod controlled_list;

pub use controlled_list::ControlledList;
