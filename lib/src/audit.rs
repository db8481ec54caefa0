//! Audit logging for registry operations
//!
//! Every state-changing registry call appends one immutable entry with an
//! auto-incrementing id. Entries live in persistent storage under their own
//! key namespace so they never collide with registry state, and can be read
//! back one at a time or as a paginated range.
use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::{MAX_AUDIT_QUERY_LIMIT, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};

// ============================================================================
// AUDIT LOG TYPES
// ============================================================================

/// Operation type categories for audit logging
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OperationType {
    // Lease lifecycle
    DomainRequested = 1,
    DomainRented = 2,
    DomainRenewed = 3,
    DomainRefunded = 4,

    // Module table
    ModuleInstalled = 10,
    SelectorRemoved = 11,

    // Administration
    AdminTransferred = 20,
    ParameterUpdate = 21,
    RetainedWithdrawn = 22,
}

/// Immutable audit log entry
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditLog {
    /// Auto-incrementing unique identifier, starting at 1
    pub id: u64,
    /// Ledger timestamp at time of operation
    pub timestamp: u64,
    /// Address that triggered the operation
    pub operator: Address,
    pub operation_type: OperationType,
    /// Name the operation touched, if any
    pub name: Option<String>,
    /// Token amount moved by the operation, 0 if none
    pub amount: i128,
}

/// Result of a paginated audit log query
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuditLogQueryResult {
    pub logs: Vec<AuditLog>,
    pub total_count: u64,
    pub start_id: u64,
    pub end_id: u64,
    pub has_more: bool,
}

// ============================================================================
// STORAGE
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum AuditStorageKey {
    LogIdCounter,
    LogEntry(u64),
}

pub fn get_log_id_counter(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&AuditStorageKey::LogIdCounter)
        .unwrap_or(0)
}

fn increment_log_id_counter(env: &Env) -> u64 {
    let key = AuditStorageKey::LogIdCounter;
    let next = get_log_id_counter(env).saturating_add(1);
    env.storage().persistent().set(&key, &next);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    next
}

pub fn get_audit_log(env: &Env, log_id: u64) -> Option<AuditLog> {
    env.storage()
        .persistent()
        .get(&AuditStorageKey::LogEntry(log_id))
}

// ============================================================================
// AUDIT LOG CREATION
// ============================================================================

/// Append a new entry and return its id. Entries are never modified or removed.
pub fn record(
    env: &Env,
    operator: &Address,
    operation_type: OperationType,
    name: Option<String>,
    amount: i128,
) -> u64 {
    let id = increment_log_id_counter(env);
    let log = AuditLog {
        id,
        timestamp: env.ledger().timestamp(),
        operator: operator.clone(),
        operation_type,
        name,
        amount,
    };

    let key = AuditStorageKey::LogEntry(id);
    env.storage().persistent().set(&key, &log);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    id
}

// ============================================================================
// AUDIT LOG QUERYING
// ============================================================================

/// Query audit logs with pagination
///
/// Returns logs inclusive of `start_id` and `end_id`. A `start_id` of 0 means
/// the first entry, an `end_id` past the last entry is clamped, and
/// `max_results` of 0 means the maximum page size.
pub fn query_audit_logs(
    env: &Env,
    start_id: u64,
    end_id: u64,
    max_results: u32,
) -> AuditLogQueryResult {
    let total_count = get_log_id_counter(env);

    let actual_start = if start_id == 0 { 1 } else { start_id };
    let actual_end = end_id.min(total_count);
    let limit = if max_results == 0 || max_results > MAX_AUDIT_QUERY_LIMIT {
        MAX_AUDIT_QUERY_LIMIT
    } else {
        max_results
    };

    let mut logs: Vec<AuditLog> = Vec::new(env);

    if actual_start > actual_end {
        return AuditLogQueryResult {
            logs,
            total_count,
            start_id: actual_start,
            end_id: actual_end,
            has_more: false,
        };
    }

    let mut count = 0u32;
    let mut current_id = actual_start;

    while current_id <= actual_end && count < limit {
        if let Some(log) = get_audit_log(env, current_id) {
            logs.push_back(log);
            count += 1;
        }
        current_id += 1;
    }

    // stopped on the limit rather than the end of the range
    let has_more = count == limit && current_id <= actual_end;

    AuditLogQueryResult {
        logs,
        total_count,
        start_id: actual_start,
        end_id: if has_more { current_id - 1 } else { actual_end },
        has_more,
    }
}
