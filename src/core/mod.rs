pub mod db;
pub mod sqlx_utils;
#[cfg(test)]
pub mod test_utils;
