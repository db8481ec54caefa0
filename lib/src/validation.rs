use soroban_sdk::String;

use crate::{errors::RegistryError, MAX_LEASE_SECONDS, MAX_METADATA_LENGTH, MAX_NAME_LENGTH};

/// Names are 1..=64 ASCII letters, digits, `-` or `_`.
pub fn validate_name(name: &String) -> Result<(), RegistryError> {
    let len = name.len();
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(RegistryError::InvalidName);
    }

    let mut buf = [0u8; MAX_NAME_LENGTH as usize];
    let bytes = &mut buf[..len as usize];
    name.copy_into_slice(bytes);

    if !bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
    {
        return Err(RegistryError::InvalidName);
    }
    Ok(())
}

/// Metadata is opaque; only its length is bounded. Empty is allowed.
pub fn validate_metadata(meta_data: &String) -> Result<(), RegistryError> {
    if meta_data.len() > MAX_METADATA_LENGTH {
        return Err(RegistryError::InvalidMetadata);
    }
    Ok(())
}

pub fn validate_duration(seconds: u64) -> Result<(), RegistryError> {
    if seconds == 0 || seconds > MAX_LEASE_SECONDS {
        return Err(RegistryError::InvalidDuration);
    }
    Ok(())
}
