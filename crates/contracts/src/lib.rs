//! Framework-free core of the custom reports demo, shared with the frontend.

pub mod dashboards;
pub mod shared;
