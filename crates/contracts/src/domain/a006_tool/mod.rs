pub mod aggregate;

pub use aggregate::{Tool, ToolDraft};
