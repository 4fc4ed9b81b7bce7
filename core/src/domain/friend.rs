use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A friend the account can send money to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_wire_payload() {
        let json = r#"{
            "id": "7f9c3a6e-2b4d-4c1a-9e8f-0a1b2c3d4e5f",
            "name": "Ana",
            "phone": "+385 91 111 2222"
        }"#;

        let friend: Friend = serde_json::from_str(json).unwrap();
        assert_eq!(friend.name, "Ana");
        assert_eq!(friend.phone, "+385 91 111 2222");
    }
}
