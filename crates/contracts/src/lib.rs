//! Records, wire shapes and the state machines behind the inventory console.
//! Nothing here touches the browser, so it is tested natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
