pub mod config;
pub mod expiry;
pub mod integrity;
pub mod money;
pub mod stock;
pub mod utils;

// Re-export commonly used types
pub use config::{read_config, write_config, ConfigError, InventoryConfig};
pub use expiry::{
    days_between, days_to_expire, is_expired, is_expired_on, parse_due_date, Clock, ExpiryError,
    FixedClock, SystemClock,
};
pub use integrity::{
    check_file_exists, compute_bytes_hash, compute_hash, file_matches_hash, get_file_hash,
    probe_file, IntegrityError,
};
pub use money::{money_format, Locale, DEFAULT_LOCALE};
pub use stock::{classify, get_stock_status, StockError, StockInput, StockQuantity, StockStatus};
pub use utils::DATE_FORMAT;
