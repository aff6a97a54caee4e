//! Shared building blocks for the users service crates.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::default();
        assert_eq!(serde_json::to_string(&h).unwrap(), "{}");
    }

    #[test]
    fn message_serializes_as_object() {
        let m = types::Message::new("User deleted");
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            serde_json::json!({"message": "User deleted"})
        );
    }
}
