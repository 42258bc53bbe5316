pub mod aggregate;

pub use aggregate::{WorkOrder, WorkOrderDraft, WorkOrderPriority, WorkOrderStatus};
