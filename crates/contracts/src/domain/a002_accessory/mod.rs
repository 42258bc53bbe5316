pub mod aggregate;

pub use aggregate::{Accessory, AccessoryAssignment, AccessoryDraft, MovementType, StockMovement};
