//! Roles and route capabilities.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Role a user registers with. It never changes afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

/// Capability a route requires before its handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// Any authenticated caller.
    AnyUser,
    /// Callers registered as buyers.
    Buyer,
    /// Callers registered as sellers.
    Seller,
}

impl Capability {
    /// Whether a caller with `role` may enter a route gated by this capability.
    pub fn permits(self, role: Role) -> bool {
        match (self, role) {
            (Capability::AnyUser, _) => true,
            (Capability::Buyer, Role::Buyer) => true,
            (Capability::Buyer, Role::Seller) => false,
            (Capability::Seller, Role::Seller) => true,
            (Capability::Seller, Role::Buyer) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_any_user_permits_every_role() {
        assert!(Capability::AnyUser.permits(Role::Buyer));
        assert!(Capability::AnyUser.permits(Role::Seller));
    }

    #[test]
    fn test_role_capabilities_are_exclusive() {
        assert!(Capability::Buyer.permits(Role::Buyer));
        assert!(!Capability::Buyer.permits(Role::Seller));
        assert!(Capability::Seller.permits(Role::Seller));
        assert!(!Capability::Seller.permits(Role::Buyer));
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"buyer\"").unwrap(),
            Role::Buyer
        );
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_role_display_and_parse() {
        assert_eq!(Role::Buyer.to_string(), "buyer");
        assert_eq!(Role::from_str("seller").unwrap(), Role::Seller);
    }
}
