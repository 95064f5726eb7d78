pub mod pool;
pub mod repository;
