use std::time::{Duration, SystemTime};

/// Decides whether a cached artifact is too old to trust.
///
/// A missing artifact (no modification time) is always stale. A file whose
/// modification time lies in the future is treated as fresh, since its age
/// cannot be computed.
pub fn is_stale(last_modified: Option<SystemTime>, ttl: Duration, now: SystemTime) -> bool {
    let Some(modified) = last_modified else {
        return true;
    };
    match now.duration_since(modified) {
        Ok(age) => age >= ttl,
        Err(_) => false,
    }
}
