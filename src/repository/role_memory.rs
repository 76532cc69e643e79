use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::role::{RoleStore, RoleStoreError, RoleStoreResult};
use crate::model::role::Role;

/// Process-local [`RoleStore`]. Ids are assigned sequentially from 1 and
/// `role_name` is unique, matching the PostgreSQL table constraints.
#[derive(Default)]
pub struct MemoryRoleStore {
    inner: RwLock<MemoryRoles>,
}

#[derive(Default)]
struct MemoryRoles {
    last_id: i32,
    roles: Vec<Role>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn create_role(&self, role_name: &str, level: i32) -> RoleStoreResult<Role> {
        if role_name.is_empty() {
            return Err(RoleStoreError::Validation(
                "role_name must not be empty".to_string(),
            ));
        }
        let mut inner = self.inner.write().await;
        if inner.roles.iter().any(|x| x.role_name == role_name) {
            return Err(RoleStoreError::Conflict(format!(
                "role with role_name = {role_name} already exists"
            )));
        }
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow!("role id sequence exhausted"))?;
        let new_role = Role {
            id,
            role_name: role_name.to_string(),
            level,
        };
        inner.last_id = id;
        inner.roles.push(new_role.clone());
        debug!(id, role_name, "role created");
        Ok(new_role)
    }

    async fn get_role(&self, id: i32) -> RoleStoreResult<Option<Role>> {
        let inner = self.inner.read().await;
        Ok(inner.roles.iter().find(|x| x.id == id).cloned())
    }

    async fn get_role_by_name(&self, role_name: &str) -> RoleStoreResult<Option<Role>> {
        let inner = self.inner.read().await;
        Ok(inner.roles.iter().find(|x| x.role_name == role_name).cloned())
    }

    async fn get_all_roles(&self) -> RoleStoreResult<Vec<Role>> {
        Ok(self.inner.read().await.roles.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use super::MemoryRoleStore;
    use crate::repository::role::{RoleStore, RoleStoreError};

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_create_assigns_distinct_ids() -> anyhow::Result<()> {
        // Given
        let store = Arc::new(MemoryRoleStore::new());

        // When
        let mut handles = vec![];
        for idx in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create_role(&format!("role_{idx}"), idx).await
            }));
        }
        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await??.id);
        }

        // Expect
        assert_eq!(ids.len(), 50);
        let all = store.get_all_roles().await?;
        assert_eq!(all.len(), 50);
        assert_eq!(all.iter().map(|x| x.id).collect::<HashSet<_>>(), ids);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() -> anyhow::Result<()> {
        let store = MemoryRoleStore::new();
        let admin = store.create_role("admin", 1).await?;
        let staff = store.create_role("staff", 2).await?;
        assert_eq!(admin.id, 1);
        assert_eq!(staff.id, 2);
        assert_eq!(staff.role_name, "staff");
        assert_eq!(staff.level, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_and_empty_name() -> anyhow::Result<()> {
        let store = MemoryRoleStore::new();
        store.create_role("admin", 1).await?;

        let res = store.create_role("admin", 5).await;
        assert!(matches!(res, Err(RoleStoreError::Conflict(_))));
        let res = store.create_role("", 5).await;
        assert!(matches!(res, Err(RoleStoreError::Validation(_))));

        // failed writes do not consume ids
        let next = store.create_role("staff", 2).await?;
        assert_eq!(next.id, 2);
        assert_eq!(store.get_all_roles().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_lookups_agree() -> anyhow::Result<()> {
        let store = MemoryRoleStore::new();
        let role = store.create_role("auditor", 3).await?;

        assert_eq!(store.get_role(role.id).await?, Some(role.clone()));
        assert_eq!(store.get_role_by_name("auditor").await?, Some(role));
        assert_eq!(store.get_role(42).await?, None);
        assert_eq!(store.get_role_by_name("missing").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_same_level_allowed() -> anyhow::Result<()> {
        let store = MemoryRoleStore::new();
        store.create_role("a", 1).await?;
        store.create_role("b", 1).await?;
        let all = store.get_all_roles().await?;
        assert_eq!(
            all.iter().map(|x| x.role_name.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        Ok(())
    }
}
