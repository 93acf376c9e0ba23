//! The asset registry: registration, closure and delivery ordering.
//!
//! Declarations arrive in any order. Each registration wires edges against
//! every node already present, so the graph ends up the same whichever side
//! of an edge is registered first. Resolution never mutates the registry.
//!
//! # Resolution
//!
//! [`AssetRegistry::resolve_assets`] runs in two phases:
//!
//! 1. **Closure**: breadth-first over declared dependencies from the requested
//!    ids, recording each reached asset with a copy of its dependency set.
//!    The closure keeps first-discovery order.
//! 2. **Elimination**: repeatedly take the first asset in discovery order whose
//!    copy is empty, emit its resolved records and strike it from its
//!    dependents' copies. The scan restarts from the front after every removal.
//!
//! The output is a valid topological order, and for an unchanged registry and
//! request it is identical from call to call.

use indexmap::{IndexMap, IndexSet};
use std::borrow::Cow;
use std::collections::VecDeque;

use crate::core::{Asset, AssetError, AssetLocation, Locator, PendingAsset};
use crate::resolver::AssetNode;

/// Registry of asset declarations.
///
/// Built during a setup phase with [`add_asset`](Self::add_asset), then
/// queried with [`resolve_assets`](Self::resolve_assets) and
/// [`resolve_asset`](Self::resolve_asset). There is no internal locking:
/// share it behind a lock if registration and resolution can overlap.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    /// Nodes in registration order.
    nodes: IndexMap<String, AssetNode>,
    /// Resource value to locator. First writer wins.
    resources: IndexMap<String, Locator>,
}

/// A closure entry: the node plus the dependencies it still waits on.
type Pending<'a> = (&'a AssetNode, IndexSet<&'a str>);

impl AssetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset, reporting why registration was refused.
    ///
    /// `resources` maps resource values to optional locators, in the order the
    /// values should be delivered. A value repeated within `resources` keeps its
    /// first position and its last locator. Values with a locator are added to
    /// the lookup index unless another asset already claimed them.
    ///
    /// An empty `resources` is accepted: the asset takes part in ordering but
    /// contributes no records to a resolution.
    ///
    /// # Errors
    ///
    /// - [`AssetError::DuplicateAssetId`] if `id` is already registered
    /// - [`AssetError::InvalidAsset`] if `id` is empty
    ///
    /// On error the registry is unchanged.
    pub fn try_add_asset<R, V, D, S>(
        &mut self,
        id: impl Into<String>,
        location: AssetLocation,
        resources: R,
        dependencies: D,
    ) -> Result<(), AssetError>
    where
        R: IntoIterator<Item = (V, Option<Locator>)>,
        V: Into<String>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        if id.is_empty() {
            return Err(AssetError::InvalidAsset {
                id,
                reason: "asset id must not be empty".to_string(),
            });
        }
        if self.nodes.contains_key(&id) {
            return Err(AssetError::DuplicateAssetId {
                id,
            });
        }

        let resources: IndexMap<String, Option<Locator>> =
            resources.into_iter().map(|(value, locator)| (value.into(), locator)).collect();
        let dependencies: IndexSet<String> = dependencies.into_iter().map(Into::into).collect();

        let mut node =
            AssetNode::new(id.clone(), location, resources.keys().cloned().collect(), dependencies);
        for existing in self.nodes.values_mut() {
            node.link(existing);
        }
        if node.i_depend_on.contains(&id) {
            node.depends_on_me.insert(id.clone());
        }

        tracing::debug!(
            "Registered asset '{}' ({} value(s), depends on [{}], {} dependent(s))",
            id,
            node.values().len(),
            node.i_depend_on().iter().map(String::as_str).collect::<Vec<_>>().join(", "),
            node.depends_on_me().len()
        );
        self.nodes.insert(id, node);

        for (value, locator) in resources {
            if let Some(locator) = locator {
                self.resources.entry(value).or_insert(locator);
            }
        }

        Ok(())
    }

    /// Register an asset.
    ///
    /// Returns `false` without touching the registry if the id is already
    /// registered (or empty); see [`try_add_asset`](Self::try_add_asset).
    pub fn add_asset<R, V, D, S>(
        &mut self,
        id: impl Into<String>,
        location: AssetLocation,
        resources: R,
        dependencies: D,
    ) -> bool
    where
        R: IntoIterator<Item = (V, Option<Locator>)>,
        V: Into<String>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.try_add_asset(id, location, resources, dependencies) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!("{error}");
                false
            }
        }
    }

    /// Register an asset backed by a single resource value.
    pub fn add_single_asset<D, S>(
        &mut self,
        id: impl Into<String>,
        location: AssetLocation,
        value: impl Into<String>,
        locator: Option<Locator>,
        dependencies: D,
    ) -> bool
    where
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_asset(id, location, [(value.into(), locator)], dependencies)
    }

    /// Look up the locator registered for a resource value.
    ///
    /// Returns `None` if no asset registered `value` with a locator.
    pub fn resolve_asset(&self, value: &str) -> Option<&Locator> {
        self.resources.get(value)
    }

    /// Compute the delivery order for `ids` and everything they depend on.
    ///
    /// Duplicate ids in the request are ignored after their first occurrence.
    ///
    /// # Errors
    ///
    /// - [`AssetError::UnresolvableAssetId`] naming the first id reached that
    ///   was never registered
    /// - [`AssetError::UnsatisfiableDependencies`] listing every asset left
    ///   when no further asset could be delivered
    pub fn resolve_assets<I, S>(&self, ids: I) -> Result<Vec<Asset>, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let closure = self.closure(ids)?;
        tracing::debug!("Asset closure: {} asset(s)", closure.len());
        Self::eliminate(closure)
    }

    /// Phase one: breadth-first closure over `i_depend_on`, in discovery order.
    fn closure<I, S>(&self, ids: I) -> Result<IndexMap<&str, Pending<'_>>, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut queue: VecDeque<Cow<'_, str>> =
            ids.into_iter().map(|id| Cow::Owned(id.as_ref().to_owned())).collect();
        let mut closure: IndexMap<&str, Pending<'_>> = IndexMap::new();

        while let Some(id) = queue.pop_front() {
            let Some(node) = self.nodes.get(&*id) else {
                return Err(AssetError::UnresolvableAssetId {
                    id: id.into_owned(),
                });
            };
            if closure.contains_key(node.id()) {
                continue;
            }

            let waiting: IndexSet<&str> = node.i_depend_on.iter().map(String::as_str).collect();
            for &dependency in &waiting {
                if !closure.contains_key(dependency) {
                    queue.push_back(Cow::Borrowed(dependency));
                }
            }
            closure.insert(node.id(), (node, waiting));
        }

        Ok(closure)
    }

    /// Phase two: rescan-from-front elimination.
    fn eliminate(mut closure: IndexMap<&str, Pending<'_>>) -> Result<Vec<Asset>, AssetError> {
        let mut delivered = Vec::new();

        while let Some(index) = closure.values().position(|(_, waiting)| waiting.is_empty()) {
            let Some((id, (node, _))) = closure.shift_remove_index(index) else {
                break;
            };
            delivered.extend(node.resolved().iter().cloned());

            for dependent in &node.depends_on_me {
                if let Some((_, waiting)) = closure.get_mut(dependent.as_str()) {
                    waiting.shift_remove(id);
                }
            }
        }

        if closure.is_empty() {
            Ok(delivered)
        } else {
            let remaining = closure
                .iter()
                .map(|(id, (_, waiting))| PendingAsset {
                    id: (*id).to_string(),
                    waiting_on: waiting.iter().map(|dependency| (*dependency).to_string()).collect(),
                })
                .collect();
            Err(AssetError::UnsatisfiableDependencies {
                remaining,
            })
        }
    }

    /// The node registered under `id`.
    pub fn get(&self, id: &str) -> Option<&AssetNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &AssetNode> {
        self.nodes.values()
    }

    /// Indexed resource values and their locators, in first-registration order.
    pub fn resources(&self) -> impl Iterator<Item = (&str, &Locator)> {
        self.resources.iter().map(|(value, locator)| (value.as_str(), locator))
    }

    /// Declared dependency ids that were never registered, each with the
    /// registered assets that declare it.
    ///
    /// Such assets register fine but cannot be resolved.
    pub fn missing_dependencies(&self) -> IndexMap<&str, Vec<&str>> {
        let mut missing: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for node in self.nodes.values() {
            for dependency in &node.i_depend_on {
                if !self.nodes.contains_key(dependency) {
                    missing.entry(dependency.as_str()).or_default().push(node.id());
                }
            }
        }
        missing
    }
}
