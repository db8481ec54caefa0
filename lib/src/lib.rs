#![no_std]
pub mod admin;
pub mod audit;
pub mod errors;
pub mod storage_keys;
pub mod types;
pub mod validation;

pub use errors::RegistryError;
pub use storage_keys::*;
pub use types::*;

// Config
pub const ADMIN_KEY: &str = "admin";
pub const MAX_NAME_LENGTH: u32 = 64;
pub const MAX_METADATA_LENGTH: u32 = 256;
pub const MAX_DURATION_DAYS: u64 = 36500; // ~100 years max lease duration
pub const MAX_LEASE_SECONDS: u64 = MAX_DURATION_DAYS * 24 * 60 * 60;
pub const MAX_AUDIT_QUERY_LIMIT: u32 = 500;

// Commit-reveal
pub const DEFAULT_MIN_LOCKING_TIME: u64 = 60; // seconds between request and rent

// Pricing, in token base units per leased second
pub const FLAT_RATE_PER_SECOND: i128 = 10;
pub const ONE_CHAR_RATE_PER_SECOND: i128 = 160;
pub const TWO_CHAR_RATE_PER_SECOND: i128 = 80;
pub const THREE_CHAR_RATE_PER_SECOND: i128 = 40;
pub const FOUR_CHAR_RATE_PER_SECOND: i128 = 20;
pub const DEFAULT_RATE_PER_SECOND: i128 = 10;

// Persistent entry TTLs, in ledgers
pub const LEDGER_SECONDS: u64 = 5;
pub const RECORD_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 1_036_800; // ~60 days
