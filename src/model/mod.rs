pub mod id_map;
pub mod play;
pub mod stats;

pub use id_map::{IdMap, IdRecord, RecordId};
pub use play::Play;
pub use stats::{DanglingReference, Stats};
