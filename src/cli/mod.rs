pub mod db;
pub mod role;
