pub mod maintenance;
pub mod not_found;
