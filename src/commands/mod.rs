// Command exports
pub mod recommend;

pub use recommend::{
    recommend, recommend_latest, tolerance_lookup, CommandError, RunContext, ALGORITHM_VERSION,
};
