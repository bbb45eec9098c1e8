use clap::Parser;
use shopkit_core::domain::common::filter::FilterPolicy;
use shopkit_core::domain::common::{DatabaseConfig, ShopkitConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "shopkit-api", about = "Shopkit admin API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Reject malformed filter payloads with 400 instead of dropping the
    /// offending entries.
    #[arg(long = "strict-filters", env = "STRICT_FILTERS", default_value_t = false)]
    pub strict_filters: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "shopkit")]
    pub name: String,
}

impl From<Args> for ShopkitConfig {
    fn from(args: Args) -> Self {
        ShopkitConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            filter_policy: if args.server.strict_filters {
                FilterPolicy::Strict
            } else {
                FilterPolicy::Lenient
            },
        }
    }
}
