pub mod auth;
pub mod pages;
pub mod permissions;
pub mod roles;
pub mod users;
