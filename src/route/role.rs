use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use tracing::warn;

use crate::{
    repository::role::RoleStoreError,
    schema::{
        common::ErrorResponse,
        role::{
            RoleAllResponses, RoleCreateRequest, RoleCreateResponses, RoleDetailResponses,
            ROLE_NOT_FOUND,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiRoleTags {
    Roles,
}

pub struct ApiRole;

#[OpenApi]
impl ApiRole {
    #[oai(path = "/roles/", method = "post", tag = "ApiRoleTags::Roles")]
    async fn create_role_api(
        &self,
        Json(json): Json<RoleCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> RoleCreateResponses {
        let new_role = match state.roles.create_role(&json.role_name, json.level).await {
            Ok(val) => val,
            Err(err @ (RoleStoreError::Conflict(_) | RoleStoreError::Validation(_))) => {
                warn!("create role {} rejected: {}", json.role_name, err);
                return RoleCreateResponses::BadRequest(Json(ErrorResponse::new(err.to_string())));
            }
            Err(err @ RoleStoreError::Unavailable(_)) => {
                return RoleCreateResponses::ServiceUnavailable(Json(ErrorResponse::internal(
                    "route.role",
                    "create_role_api",
                    "create_role",
                    &err.to_string(),
                )));
            }
            Err(err) => {
                return RoleCreateResponses::InternalServerError(Json(ErrorResponse::internal(
                    "route.role",
                    "create_role_api",
                    "create_role",
                    &err.to_string(),
                )));
            }
        };
        RoleCreateResponses::Ok(Json(new_role.into()))
    }

    #[oai(path = "/roles/:role_id", method = "get", tag = "ApiRoleTags::Roles")]
    async fn get_role_api(
        &self,
        Path(role_id): Path<i64>,
        state: Data<&Arc<AppState>>,
    ) -> RoleDetailResponses {
        // ids outside the store's i32 range are never assigned
        let Ok(role_id) = i32::try_from(role_id) else {
            return RoleDetailResponses::NotFound(Json(ErrorResponse::new(ROLE_NOT_FOUND)));
        };
        let data = match state.roles.get_role(role_id).await {
            Ok(val) => val,
            Err(err) => {
                return RoleDetailResponses::InternalServerError(Json(ErrorResponse::internal(
                    "route.role",
                    "get_role_api",
                    "get_role",
                    &err.to_string(),
                )))
            }
        };
        match data {
            Some(role) => RoleDetailResponses::Ok(Json(role.into())),
            None => RoleDetailResponses::NotFound(Json(ErrorResponse::new(ROLE_NOT_FOUND))),
        }
    }

    #[oai(path = "/roles/name/:role_name", method = "get", tag = "ApiRoleTags::Roles")]
    async fn get_role_by_name_api(
        &self,
        Path(role_name): Path<String>,
        state: Data<&Arc<AppState>>,
    ) -> RoleDetailResponses {
        let data = match state.roles.get_role_by_name(&role_name).await {
            Ok(val) => val,
            Err(err) => {
                return RoleDetailResponses::InternalServerError(Json(ErrorResponse::internal(
                    "route.role",
                    "get_role_by_name_api",
                    "get_role_by_name",
                    &err.to_string(),
                )))
            }
        };
        match data {
            Some(role) => RoleDetailResponses::Ok(Json(role.into())),
            None => RoleDetailResponses::NotFound(Json(ErrorResponse::new(ROLE_NOT_FOUND))),
        }
    }

    #[oai(path = "/roles/", method = "get", tag = "ApiRoleTags::Roles")]
    async fn list_roles_api(&self, state: Data<&Arc<AppState>>) -> RoleAllResponses {
        let data = match state.roles.get_all_roles().await {
            Ok(val) => val,
            Err(err) => {
                return RoleAllResponses::InternalServerError(Json(ErrorResponse::internal(
                    "route.role",
                    "list_roles_api",
                    "get_all_roles",
                    &err.to_string(),
                )))
            }
        };
        RoleAllResponses::Ok(Json(data.into_iter().map(Into::into).collect()))
    }
}
