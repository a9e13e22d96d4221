use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Integer sentinel the API uses for "field not set" (2^31 - 1)
pub const UNSET_INTEGER: i32 = i32::MAX;

/// Double sentinel the API uses for "field not set"
pub const UNSET_DOUBLE: f64 = f64::MAX;

/// Default value for every timestamp field (1970-01-01T00:00:00Z)
pub const EPOCH: Timestamp = DateTime::<Utc>::UNIX_EPOCH;

/// Check whether an integer field still holds the unset sentinel
pub fn is_unset_integer(value: i32) -> bool {
    value == UNSET_INTEGER
}

/// Check whether a double field still holds the unset sentinel
pub fn is_unset_double(value: f64) -> bool {
    value == UNSET_DOUBLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(UNSET_INTEGER, 2_147_483_647);
        assert!(is_unset_integer(UNSET_INTEGER));
        assert!(!is_unset_integer(0));
        assert!(is_unset_double(UNSET_DOUBLE));
        assert!(!is_unset_double(f64::NAN));
    }

    #[test]
    fn test_epoch() {
        assert_eq!(EPOCH.timestamp(), 0);
    }
}
