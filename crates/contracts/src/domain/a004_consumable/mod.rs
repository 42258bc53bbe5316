pub mod aggregate;

pub use aggregate::{Consumable, ConsumableDraft};
