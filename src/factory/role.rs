use fake::{faker::lorem::en::Word, Dummy, Fake, Faker};

use crate::{model::role::Role, repository::role::RoleStore};

/// Seeds a [`RoleStore`] with generated roles. Modifiers rewrite each
/// generated role before it is written; the id they return is ignored since
/// the store assigns it.
pub struct RoleFactory<T: Clone> {
    modifier_one: fn(x: &RoleDummy, ext: T) -> RoleDummy,
    modifier_many: fn(x: &RoleDummy, idx: usize, ext: T) -> RoleDummy,
}

impl<T: Clone> Default for RoleFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RoleFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &RoleDummy, ext: T) -> RoleDummy) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &RoleDummy, idx: usize, ext: T) -> RoleDummy) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, store: &dyn RoleStore, ext: T) -> anyhow::Result<Role> {
        let data = (self.modifier_one)(&RoleDummy::new(), ext);
        let role = store.create_role(&data.role_name, data.level).await?;
        Ok(role)
    }

    pub async fn generate_many(
        &mut self,
        store: &dyn RoleStore,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Role>> {
        let mut result: Vec<Role> = vec![];
        for idx in 0..num as usize {
            // index suffix keeps generated names unique within one batch
            let mut dummy = RoleDummy::new();
            dummy.role_name = format!("{}_{}", dummy.role_name, idx);
            let data = (self.modifier_many)(&dummy, idx, ext.clone());
            result.push(store.create_role(&data.role_name, data.level).await?);
        }
        Ok(result)
    }
}

#[derive(Debug, Clone, Dummy)]
pub struct RoleDummy {
    #[dummy(faker = "Word()")]
    pub role_name: String,
    #[dummy(faker = "1..100")]
    pub level: i32,
}

impl RoleDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }
}

impl Default for RoleDummy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        factory::role::{RoleDummy, RoleFactory},
        repository::{role::RoleStore, role_memory::MemoryRoleStore},
    };

    #[derive(Clone)]
    struct ExtData {
        pub level: i32,
    }

    #[tokio::test]
    async fn test_generate_one() -> anyhow::Result<()> {
        // When
        let store = MemoryRoleStore::new();
        let mut factory = RoleFactory::new();
        let role = factory.generate_one(&store, ()).await?;

        // Expect
        assert_eq!(store.get_all_roles().await?, vec![role]);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_one_modified() -> anyhow::Result<()> {
        // When
        let store = MemoryRoleStore::new();
        let mut factory = RoleFactory::<ExtData>::new();
        factory.modified_one(|_, ext| RoleDummy {
            role_name: "test_role".to_string(),
            level: ext.level,
        });
        factory.generate_one(&store, ExtData { level: 7 }).await?;

        // Expect
        let role = store.get_role_by_name("test_role").await?;
        assert!(role.is_some());
        assert_eq!(role.unwrap().level, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_many() -> anyhow::Result<()> {
        // When
        let store = MemoryRoleStore::new();
        let mut factory = RoleFactory::new();
        factory.generate_many(&store, 10, ()).await?;

        // Expect
        assert_eq!(store.get_all_roles().await?.len(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_many_modified() -> anyhow::Result<()> {
        // When
        let store = MemoryRoleStore::new();
        let mut factory = RoleFactory::<ExtData>::new();
        factory.modified_many(|data, idx, ext| RoleDummy {
            role_name: data.role_name.clone(),
            level: ext.level + idx as i32,
        });
        factory.generate_many(&store, 5, ExtData { level: 10 }).await?;

        // Expect
        let levels: Vec<i32> = store
            .get_all_roles()
            .await?
            .iter()
            .map(|x| x.level)
            .collect();
        assert_eq!(levels, vec![10, 11, 12, 13, 14]);
        Ok(())
    }
}
