//! Network DTOs

use serde::{Deserialize, Serialize};

/// Request to create a network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNetwork {
    pub name: String,

    pub admin_state_up: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
}

/// Partial update of a network
///
/// Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
}

impl UpdateNetwork {
    /// True when no field would be sent
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.admin_state_up.is_none() && self.shared.is_none()
    }
}

/// Server-side filters for listing networks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkFilter {
    /// Only networks with `router:external=True`
    pub external: bool,
}

impl NetworkFilter {
    /// Query parameters for this filter
    pub fn query(&self) -> Vec<(&'static str, &'static str)> {
        let mut query = Vec::new();
        if self.external {
            query.push(("router:external", "True"));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_omits_unset_shared() {
        let body = CreateNetwork {
            name: "net1".to_string(),
            admin_state_up: true,
            shared: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "net1", "admin_state_up": true})
        );
    }

    #[test]
    fn test_create_keeps_explicit_no_share() {
        let body = CreateNetwork {
            name: "net1".to_string(),
            admin_state_up: false,
            shared: Some(false),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "net1", "admin_state_up": false, "shared": false})
        );
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = UpdateNetwork {
            admin_state_up: Some(false),
            ..Default::default()
        };

        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"admin_state_up": false})
        );
        assert!(UpdateNetwork::default().is_empty());
    }

    #[test]
    fn test_filter_query() {
        assert!(NetworkFilter::default().query().is_empty());
        assert_eq!(
            NetworkFilter { external: true }.query(),
            vec![("router:external", "True")]
        );
    }
}
