use serde::{Deserialize, Serialize};

/// User role.
///
/// Closed enumeration: adding a role forces every capability mapping to be
/// revisited via the exhaustive match in [`capabilities_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    InventoryManager,
    Pharmacist,
    ComplianceOfficer,
    Executive,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::InventoryManager => "inventory_manager",
            Role::Pharmacist => "pharmacist",
            Role::ComplianceOfficer => "compliance_officer",
            Role::Executive => "executive",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view or feature area a role may access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Dashboard,
    Inventory,
    Suppliers,
    Orders,
    Transactions,
    Reports,
    Compliance,
    Alerts,
}

/// Capabilities granted to a role.
///
/// Total over [`Role`]; there is deliberately no wildcard entry — the admin
/// grant lists every capability explicitly so the compiler keeps it honest.
pub fn capabilities_for(role: Role) -> &'static [Capability] {
    use Capability::*;
    match role {
        Role::Admin => &[
            Dashboard,
            Inventory,
            Suppliers,
            Orders,
            Transactions,
            Reports,
            Compliance,
            Alerts,
        ],
        Role::InventoryManager => &[Inventory, Suppliers, Orders, Transactions, Reports, Alerts],
        Role::Pharmacist => &[Inventory, Transactions],
        Role::ComplianceOfficer => &[Inventory, Reports, Compliance, Alerts],
        Role::Executive => &[Dashboard, Reports],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 5] = [
        Role::Admin,
        Role::InventoryManager,
        Role::Pharmacist,
        Role::ComplianceOfficer,
        Role::Executive,
    ];

    #[test]
    fn admin_holds_every_capability() {
        let admin = capabilities_for(Role::Admin);
        for role in ALL_ROLES {
            for cap in capabilities_for(role) {
                assert!(admin.contains(cap), "admin missing {cap:?} held by {role:?}");
            }
        }
    }

    #[test]
    fn pharmacist_cannot_reach_compliance() {
        let caps = capabilities_for(Role::Pharmacist);
        assert!(caps.contains(&Capability::Inventory));
        assert!(!caps.contains(&Capability::Compliance));
        assert!(!caps.contains(&Capability::Suppliers));
    }

    #[test]
    fn roles_round_trip_through_serde_names() {
        for role in ALL_ROLES {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }
}
