use async_trait::async_trait;
use sqlx::{error::ErrorKind, Pool, Postgres};
use thiserror::Error;
use tracing::debug;

use crate::{
    core::sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    model::role::{Role, TABLE_NAME},
};

/// Failure reported by a [`RoleStore`], classified so callers can pick a
/// response without inspecting messages.
#[derive(Debug, Error)]
pub enum RoleStoreError {
    /// The write collides with an existing role, e.g. a duplicate `role_name`.
    #[error("{0}")]
    Conflict(String),
    /// The store rejected the values themselves.
    #[error("{0}")]
    Validation(String),
    /// The backing storage could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RoleStoreResult<T> = Result<T, RoleStoreError>;

impl From<sqlx::Error> for RoleStoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_string();
            match db_err.kind() {
                ErrorKind::UniqueViolation => return Self::Conflict(message),
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => return Self::Validation(message),
                _ => {}
            }
        }
        if matches!(
            err,
            sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
                | sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
        ) {
            return Self::Unavailable(err.to_string());
        }
        Self::Other(err.into())
    }
}

/// Persistence for roles. Implementations are shared across every request,
/// so they must be safe for concurrent use.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn create_role(&self, role_name: &str, level: i32) -> RoleStoreResult<Role>;

    async fn get_role(&self, id: i32) -> RoleStoreResult<Option<Role>>;

    async fn get_role_by_name(&self, role_name: &str) -> RoleStoreResult<Option<Role>>;

    /// Every role, in ascending id order.
    async fn get_all_roles(&self) -> RoleStoreResult<Vec<Role>>;
}

#[derive(Clone)]
pub struct PgRoleStore {
    db: Pool<Postgres>,
}

impl PgRoleStore {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn create_role(&self, role_name: &str, level: i32) -> RoleStoreResult<Role> {
        let mut tx = self.db.begin().await?;
        let stmt = format!(
            r#"
    INSERT INTO {} (role_name, level)
    VALUES ($1, $2)
    RETURNING id, role_name, level"#,
            TABLE_NAME
        );
        let new_role = sqlx::query_as::<_, Role>(&stmt)
            .bind(role_name)
            .bind(level)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        debug!(id = new_role.id, role_name = %new_role.role_name, "role created");
        Ok(new_role)
    }

    async fn get_role(&self, id: i32) -> RoleStoreResult<Option<Role>> {
        let filters: Vec<String> = vec!["id = $1".to_string()];
        let stmt = query_builder(None, TABLE_NAME, &filters, &[], None);
        let q = binds_query_as::<Role>(&stmt, vec![SqlxBinds::Int(id)]);
        let data = q.fetch_optional(&self.db).await?;
        Ok(data)
    }

    async fn get_role_by_name(&self, role_name: &str) -> RoleStoreResult<Option<Role>> {
        let filters: Vec<String> = vec!["role_name = $1".to_string()];
        let stmt = query_builder(None, TABLE_NAME, &filters, &[], None);
        let q = binds_query_as::<Role>(&stmt, vec![SqlxBinds::String(role_name.to_string())]);
        let data = q.fetch_optional(&self.db).await?;
        Ok(data)
    }

    async fn get_all_roles(&self) -> RoleStoreResult<Vec<Role>> {
        let stmt = query_builder(None, TABLE_NAME, &[], &["id ASC".to_string()], None);
        let q = binds_query_as::<Role>(&stmt, vec![]);
        let data = q.fetch_all(&self.db).await?;
        Ok(data)
    }
}
