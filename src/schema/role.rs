use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::ErrorResponse;
use crate::model::role::Role;

pub const ROLE_NOT_FOUND: &str = "Role not found";

#[derive(Object, Deserialize, Serialize)]
pub struct RoleCreateRequest {
    #[oai(validator(min_length = 1))]
    pub role_name: String,
    pub level: i32,
}

#[derive(Object, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleResponse {
    pub id: i32,
    pub role_name: String,
    pub level: i32,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            role_name: role.role_name,
            level: role.level,
        }
    }
}

#[derive(ApiResponse)]
pub enum RoleCreateResponses {
    #[oai(status = 201)]
    Ok(Json<RoleResponse>),

    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),

    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum RoleDetailResponses {
    #[oai(status = 200)]
    Ok(Json<RoleResponse>),

    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum RoleAllResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<RoleResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}
