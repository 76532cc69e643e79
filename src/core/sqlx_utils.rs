use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    Postgres,
};

#[derive(Clone, Debug)]
pub enum SqlxBinds {
    String(String),
    Int(i32),
}

pub fn binds_query_as<'a, T: for<'r> sqlx::FromRow<'r, PgRow>>(
    stmt: &'a str,
    binds: Vec<SqlxBinds>,
) -> QueryAs<'a, Postgres, T, PgArguments> {
    let mut q: QueryAs<'_, Postgres, T, PgArguments> = sqlx::query_as(stmt);
    for bind in binds {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val),
            SqlxBinds::Int(val) => q.bind(val),
        };
    }
    q
}

/// Builds a plain `SELECT` statement. Filters are joined with `AND`,
/// placeholders inside them must line up with the binds passed to
/// [`binds_query_as`].
pub fn query_builder(
    select: Option<&str>,
    table_name: &str,
    wheres: &[String],
    order_by: &[String],
    limit: Option<u32>,
) -> String {
    let mut stmt = format!("SELECT {} FROM {}", select.unwrap_or("*"), table_name);
    if !wheres.is_empty() {
        stmt.push_str(" WHERE ");
        stmt.push_str(&wheres.join(" AND "));
    }
    if !order_by.is_empty() {
        stmt.push_str(" ORDER BY ");
        stmt.push_str(&order_by.join(", "));
    }
    if let Some(limit) = limit {
        stmt.push_str(&format!(" LIMIT {limit}"));
    }
    stmt
}

#[cfg(test)]
mod tests {
    use super::query_builder;

    #[test]
    fn test_query_builder_select_all() {
        let stmt = query_builder(None, "public.role_hierarchy", &[], &[], None);
        assert_eq!(stmt, "SELECT * FROM public.role_hierarchy");
    }

    #[test]
    fn test_query_builder_full() {
        let stmt = query_builder(
            Some("id, role_name, level"),
            "public.role_hierarchy",
            &["role_name = $1".to_string(), "level = $2".to_string()],
            &["level ASC".to_string(), "id ASC".to_string()],
            Some(1),
        );
        assert_eq!(
            stmt,
            "SELECT id, role_name, level FROM public.role_hierarchy \
            WHERE role_name = $1 AND level = $2 ORDER BY level ASC, id ASC LIMIT 1"
        );
    }
}
