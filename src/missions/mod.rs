//! Mission definitions and the catalog they are drawn from.

pub mod catalog;
pub mod definition;

pub use catalog::MissionCatalog;
pub use definition::{Mission, MissionId, PatternKind, TargetShape};
