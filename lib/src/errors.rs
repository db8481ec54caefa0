use soroban_sdk::contracterror;

/// Every failure the registry can surface to a caller.
///
/// A contract function returning one of these aborts the invocation and the
/// host discards all storage writes and token transfers made during it.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// The name is held by an unexpired lease.
    NameUnavailable = 4,
    /// No commitment for the sender, or `(name, salt)` does not hash to it.
    InvalidReveal = 5,
    /// The commitment is younger than the configured minimum locking time.
    TooEarly = 6,
    InsufficientPayment = 7,
    NotOwner = 8,
    LeaseExpired = 9,
    LeaseNotExpired = 10,
    /// No module is installed for the requested selector.
    UnknownOperation = 11,
    DomainNotFound = 12,
    InvalidName = 13,
    InvalidMetadata = 14,
    InvalidDuration = 15,
    /// The module does not implement the selector it was asked to serve.
    UnsupportedSelector = 16,
    ArithmeticOverflow = 17,
    NothingToWithdraw = 18,
}
