//! A single registered asset and its edge sets.

use indexmap::IndexSet;

use crate::core::{Asset, AssetLocation};

/// One registered asset.
///
/// Edges are stored as id sets on both ends rather than as references between
/// nodes. `i_depend_on` is fixed at registration; `depends_on_me` grows as
/// later registrations declare this node as a dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNode {
    id: String,
    location: AssetLocation,
    values: Vec<String>,
    resolved: Vec<Asset>,
    pub(crate) depends_on_me: IndexSet<String>,
    pub(crate) i_depend_on: IndexSet<String>,
}

impl AssetNode {
    /// Create a node with no dependents.
    ///
    /// `resolved` pairs `location` with each value, in value order.
    pub(crate) fn new(
        id: String,
        location: AssetLocation,
        values: Vec<String>,
        i_depend_on: IndexSet<String>,
    ) -> Self {
        let resolved = values.iter().map(|value| Asset::of(location, value.as_str())).collect();
        Self {
            id,
            location,
            values,
            resolved,
            depends_on_me: IndexSet::new(),
            i_depend_on,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> AssetLocation {
        self.location
    }

    /// Resource values in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Resolved records, one per value, in declaration order.
    pub fn resolved(&self) -> &[Asset] {
        &self.resolved
    }

    /// Ids of registered assets that declared this one as a dependency.
    pub fn depends_on_me(&self) -> &IndexSet<String> {
        &self.depends_on_me
    }

    /// Ids this asset declared as dependencies, registered or not.
    pub fn i_depend_on(&self) -> &IndexSet<String> {
        &self.i_depend_on
    }

    /// Wire the edge between this node and `other` in whichever direction
    /// either side declares.
    ///
    /// `self` is the node being registered and `other` one already present.
    pub(crate) fn link(&mut self, other: &mut AssetNode) {
        if other.i_depend_on.contains(&self.id) {
            self.depends_on_me.insert(other.id.clone());
        }
        if self.i_depend_on.contains(&other.id) {
            other.depends_on_me.insert(self.id.clone());
        }
    }
}
