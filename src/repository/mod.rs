pub mod role;
pub mod role_memory;
