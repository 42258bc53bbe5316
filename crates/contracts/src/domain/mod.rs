pub mod a001_asset;
pub mod a002_accessory;
pub mod a003_category;
pub mod a004_consumable;
pub mod a005_license;
pub mod a006_tool;
pub mod a007_work_order;
pub mod common;
