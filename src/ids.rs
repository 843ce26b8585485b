//! Trade identifier generation.

use uuid::Uuid;

/// Fresh random trade id (UUID v4, hyphenated).
pub fn generate_trade_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_ids_are_unique_uuids() {
        let a = generate_trade_id();
        let b = generate_trade_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
