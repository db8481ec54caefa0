use soroban_sdk::{symbol_short, Symbol};

pub const PAYMENT_TOKEN_KEY: Symbol = symbol_short!("pay_tok");
pub const MIN_LOCKING_TIME_KEY: Symbol = symbol_short!("lock_time");
pub const RETAINED_KEY: Symbol = symbol_short!("kept_bal");
pub const SELECTOR_INDEX_KEY: Symbol = symbol_short!("sel_idx");

// Routed operation selectors

pub const REQUEST_DOMAIN: Symbol = symbol_short!("req_dom");
pub const GENERATE_SECRET: Symbol = symbol_short!("gen_sec");
pub const PENDING_COMMITMENT: Symbol = symbol_short!("commit_of");

pub const RENT_DOMAIN: Symbol = symbol_short!("rent_dom");
pub const RENEW: Symbol = symbol_short!("renew");
pub const REFUND_DOMAIN: Symbol = symbol_short!("refund");
pub const DOMAIN_DATA: Symbol = symbol_short!("dom_data");
pub const IS_AVAILABLE: Symbol = symbol_short!("avail");

pub const RENT_PRICE: Symbol = symbol_short!("rent_px");

pub const UPDATE_MIN_LOCKING_TIME: Symbol = symbol_short!("set_lock");
pub const MIN_LOCKING_TIME: Symbol = symbol_short!("min_lock");
pub const RETAINED_BALANCE: Symbol = symbol_short!("retained");
pub const WITHDRAW_RETAINED: Symbol = symbol_short!("withdraw");
