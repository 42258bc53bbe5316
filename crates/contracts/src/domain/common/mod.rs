//! Types shared by every inventory record

pub mod entity_id;
pub mod status;
pub mod wire;

pub use entity_id::{parse_optional_id, EntityId, PendingId};
pub use status::{EntityStatus, StatusChoice};
pub use wire::{blank_as_null, check_optional_date, parse_date};
