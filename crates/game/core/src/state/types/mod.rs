pub mod common;
pub mod continent;
pub mod zone;

// Re-export common types
pub use common::{ContinentId, Garrison, Owner, PlayerId, ZoneId};

// Re-export graph node types
pub use continent::Continent;
pub use zone::{Links, Zone};
