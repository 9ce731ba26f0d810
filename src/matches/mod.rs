//! Matches: state, snapshots, and the table of live matches.

mod state;
mod snapshot;
mod table;

pub use state::{init_match, Match};
pub use snapshot::MatchSnapshot;
pub use table::MatchTable;
