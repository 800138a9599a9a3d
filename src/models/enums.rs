//! Enumeration types for the Dotide API.

use serde::{Deserialize, Serialize};

/// An operation an access token scope grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Read datastreams and datapoints
    Read,
    /// Create and update datastreams and datapoints
    Write,
    /// Delete datastreams and datapoints
    Delete,
}

impl Permission {
    /// All permissions, in the order the API lists them.
    pub const ALL: [Permission; 3] = [Permission::Read, Permission::Write, Permission::Delete];
}

/// Sort order of datapoints in a range query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_wire_names() {
        assert_eq!(serde_json::to_string(&Permission::ALL).unwrap(), r#"["read","write","delete"]"#);
        let p: Permission = serde_json::from_str(r#""delete""#).unwrap();
        assert_eq!(p, Permission::Delete);
    }

    #[test]
    fn test_order_wire_names() {
        assert_eq!(serde_json::to_string(&Order::Desc).unwrap(), r#""desc""#);
        assert_eq!(serde_json::to_string(&Order::default()).unwrap(), r#""asc""#);
    }
}
