use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::common::filter::FilterPolicy;

pub mod entities;
pub mod filter;
pub mod pagination;
pub mod services;

#[derive(Clone, Debug)]
pub struct ShopkitConfig {
    pub database: DatabaseConfig,
    pub filter_policy: FilterPolicy,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}