pub mod aggregate;

pub use aggregate::{Asset, AssetAssignment, AssetDraft, AssetTransfer};
