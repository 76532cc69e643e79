use serde::Serialize;

use crate::{repository::role::RoleStore, schema::role::ROLE_NOT_FOUND};

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn create_role(store: &dyn RoleStore, role_name: &str, level: i32) -> anyhow::Result<()> {
    let role = store.create_role(role_name, level).await?;
    print_json(&role)
}

pub async fn get_role(store: &dyn RoleStore, id: i32) -> anyhow::Result<()> {
    match store.get_role(id).await? {
        Some(role) => print_json(&role),
        None => anyhow::bail!(ROLE_NOT_FOUND),
    }
}

pub async fn get_role_by_name(store: &dyn RoleStore, role_name: &str) -> anyhow::Result<()> {
    match store.get_role_by_name(role_name).await? {
        Some(role) => print_json(&role),
        None => anyhow::bail!(ROLE_NOT_FOUND),
    }
}

pub async fn list_roles(store: &dyn RoleStore) -> anyhow::Result<()> {
    let roles = store.get_all_roles().await?;
    print_json(&roles)
}
