mod manager;
mod types;

pub use manager::{ConfigManager, StateManager};
pub use types::{
    MAX_CHECK_INTERVAL_MINUTES, MIN_CHECK_INTERVAL_MINUTES, Settings, WatchState, WatchTarget,
};
