use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.role_hierarchy";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct Role {
    pub id: i32,
    pub role_name: String,
    pub level: i32,
}
