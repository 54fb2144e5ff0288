use clap::{Parser, ValueEnum};
use quill_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "QUILL_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "QUILL_GATEWAY_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "QUILL_GATEWAY_MYSQL_DSN";
pub const MYSQL_MAX_CONNECTIONS_ENV: &str = "QUILL_GATEWAY_MYSQL_MAX_CONNECTIONS";
pub const ALLOWED_ORIGIN_ENV: &str = "QUILL_GATEWAY_ALLOWED_ORIGIN";
pub const LOG_FORMAT_ENV: &str = "QUILL_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:9098";
pub const DEFAULT_MYSQL_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "quill-gateway", about = "REST API for managing posts")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(
        long,
        env = MYSQL_MAX_CONNECTIONS_ENV,
        default_value_t = DEFAULT_MYSQL_MAX_CONNECTIONS
    )]
    pub mysql_max_connections: u32,

    /// Origin allowed to make cross-origin requests.
    #[arg(long, env = ALLOWED_ORIGIN_ENV, default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    /// `pretty` or `json`.
    #[arg(long, env = LOG_FORMAT_ENV, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
