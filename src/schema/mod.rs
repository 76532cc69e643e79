pub mod common;
pub mod role;
