pub mod collection;
pub mod memory;
pub mod sqlx_repo;
