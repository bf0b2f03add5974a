//! Listing selection.

use serde::{Deserialize, Serialize};

use super::node::TreeNode;

/// Identifier prefix of a facility listing.
pub const DEFAULT_LISTING_PREFIX: &str = "PR";
/// Identifier suffix of a facility listing.
pub const DEFAULT_LISTING_SUFFIX: &str = "~";

/// Identifier rule marking a node as a facility listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPattern {
    pub prefix: String,
    pub suffix: String,
    /// Restrict matches to one element name. Any element matches when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Default for ListingPattern {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_LISTING_PREFIX.to_string(),
            suffix: DEFAULT_LISTING_SUFFIX.to_string(),
            tag: None,
        }
    }
}

impl ListingPattern {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Check whether a node is a listing under this pattern.
    pub fn matches<N: TreeNode>(&self, node: &N) -> bool {
        if let Some(ref tag) = self.tag {
            if !node.is_tag(tag) {
                return false;
            }
        }

        node.identifier()
            .is_some_and(|id| id.starts_with(&self.prefix) && id.ends_with(&self.suffix))
    }
}

/// Find every listing under `root` (the document element), in document order.
///
/// The root itself is checked too. Nested listings are all returned.
pub fn select_listings<N: TreeNode>(root: N, pattern: &ListingPattern) -> Vec<N> {
    let mut listings = Vec::new();
    if pattern.matches(&root) {
        listings.push(root);
    }
    listings.extend(root.descendants_matching(|node| pattern.matches(node)));
    listings
}
