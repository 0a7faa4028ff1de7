//! Key encoding for ownership-scoped partitions.
//!
//! Owned records are stored under composite keys `{owner}:{record_id}`.
//! Owner ids are validated at construction to never contain `:`, so the
//! first colon always separates the two parts.

use anyhow::Result;

/// Encode an owned-record key: `{owner}:{record_id}`
pub fn owner_key(owner: &str, record_id: &str) -> String {
    let mut s = String::with_capacity(owner.len() + 1 + record_id.len());
    s.push_str(owner);
    s.push(':');
    s.push_str(record_id);
    s
}

/// The scan prefix covering every record of one owner: `{owner}:`
///
/// The trailing separator keeps owner `"ab"` from matching owner `"abc"`.
pub fn owner_prefix(owner: &str) -> String {
    let mut s = String::with_capacity(owner.len() + 1);
    s.push_str(owner);
    s.push(':');
    s
}

/// Parse an owned-record key into `(owner, record_id)`.
pub fn parse_owner_key(key: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = key.splitn(2, ':').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        anyhow::bail!("Invalid owner key format: {}", key);
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_key_roundtrip() {
        let key = owner_key("user123", "rec001");
        assert_eq!(key, "user123:rec001");

        let (owner, record_id) = parse_owner_key(&key).unwrap();
        assert_eq!(owner, "user123");
        assert_eq!(record_id, "rec001");
    }

    #[test]
    fn test_owner_prefix_excludes_longer_owner() {
        let prefix = owner_prefix("ab");
        assert!(owner_key("ab", "r1").starts_with(&prefix));
        assert!(!owner_key("abc", "r1").starts_with(&prefix));
    }

    #[test]
    fn test_invalid_owner_key() {
        assert!(parse_owner_key("no-separator").is_err());
        assert!(parse_owner_key(":rec").is_err());
        assert!(parse_owner_key("owner:").is_err());
    }
}
