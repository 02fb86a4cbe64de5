//! Placeholders for comments left out of a tree.

use serde::{Deserialize, Serialize};

use super::nullable;

/// Stands in for comments the API did not include in a response.
///
/// The `children` full IDs are what a caller hands to the "more children"
/// endpoint to fetch the hidden comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct More {
    /// Short ID
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Full ID (`more_...` style or `t1_...`)
    #[serde(rename = "name", deserialize_with = "nullable")]
    pub full_id: String,
    /// Full ID of the comment or post these comments reply to
    #[serde(deserialize_with = "nullable")]
    pub parent_id: String,
    /// Total number of hidden replies, counting replies to replies
    #[serde(deserialize_with = "nullable")]
    pub count: u64,
    /// Number of levels from the parent down to the deepest hidden comment
    #[serde(deserialize_with = "nullable")]
    pub depth: u64,
    /// Full IDs of the hidden comments
    #[serde(deserialize_with = "nullable")]
    pub children: Vec<String>,
}

impl More {
    /// Whether any hidden comment IDs remain to be fetched.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full() {
        let more: More = serde_json::from_value(json!({
            "id": "k2",
            "name": "t1_k2",
            "parent_id": "t1_k1",
            "count": 14,
            "depth": 2,
            "children": ["t1_k2", "t1_k3"],
        }))
        .unwrap();

        assert_eq!(more.full_id, "t1_k2");
        assert_eq!(more.parent_id, "t1_k1");
        assert_eq!(more.count, 14);
        assert_eq!(more.depth, 2);
        assert_eq!(more.children, vec!["t1_k2", "t1_k3"]);
        assert!(more.has_children());
    }

    #[test]
    fn test_decode_sparse() {
        let more: More = serde_json::from_value(json!({
            "name": "more_1",
            "parent_id": "t3_abc",
        }))
        .unwrap();

        assert_eq!(more.id, "");
        assert_eq!(more.count, 0);
        assert!(!more.has_children());
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        assert!(serde_json::from_value::<More>(json!({ "count": "many" })).is_err());
        assert!(serde_json::from_value::<More>(json!({ "children": "t1_a" })).is_err());
        assert!(serde_json::from_value::<More>(json!("more_1")).is_err());
    }
}
