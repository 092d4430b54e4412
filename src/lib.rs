pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod summary;
pub mod winrate;

pub use error::{Result, StatsError};
pub use loader::{load_stats, parse_stats};
pub use model::*;
pub use winrate::{compute_win_rates, PlayerStat};
