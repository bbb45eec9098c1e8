pub mod db;
pub mod product;
pub mod query;
pub mod user;
