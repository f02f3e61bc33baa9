use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, trace};
use num_traits::{PrimInt, Signed};

use crate::error::{Error, Result};
use crate::graph::residual::{EdgeId, FlowNetwork};

/// Source-to-sink path of edges that all have positive residual capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    edges: Vec<EdgeId>,
}

impl AugmentingPath {
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Final state of one inserted edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeFlow<V, C> {
    pub start: V,
    pub end: V,
    pub capacity: C,
    pub flow: C,
}

/// Per-edge flow assignment plus the total flow leaving the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSummary<V, C> {
    pub max_flow: C,
    pub edges: Vec<EdgeFlow<V, C>>,
}

impl<V, C> FlowNetwork<V, C>
where
    V: Hash + Eq + Clone + Debug,
    C: PrimInt + Signed + Debug,
{
    /// Finds the shortest (fewest edges) augmenting path from `source` to `sink`.
    ///
    /// Outgoing edges are scanned in insertion order and the first edge that
    /// reaches `sink` ends the search, so ties between equally short paths are
    /// broken by insertion order. Unknown vertices behave as if they had no
    /// outgoing edges.
    ///
    /// # Returns
    /// * `Some(path)` - the first shortest augmenting path
    /// * `None` - no augmenting path exists (or `source == sink`)
    ///
    /// # Complexity
    /// * Time: O(V + E)
    /// * Space: O(V)
    pub fn find_path(&self, source: &V, sink: &V) -> Option<AugmentingPath> {
        if source == sink {
            return None;
        }

        // parent[v] is the edge that first discovered v
        let mut parent: HashMap<&V, EdgeId> = HashMap::new();
        let mut visited: HashSet<&V> = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(source);
        queue.push_back(source);

        while let Some(vertex) = queue.pop_front() {
            let outgoing = match self.outgoing_edges(vertex) {
                Ok(outgoing) => outgoing,
                Err(_) => {
                    trace!("vertex {:?} is not in the network", vertex);
                    continue;
                }
            };

            for &id in outgoing {
                let edge = self.edge(id);
                if edge.residual_capacity() <= C::zero() {
                    continue;
                }
                if &edge.end == sink {
                    return Some(self.trace_back(&parent, source, id));
                }
                if visited.insert(&edge.end) {
                    trace!("reached {:?} via {:?}", edge.end, id);
                    parent.insert(&edge.end, id);
                    queue.push_back(&edge.end);
                }
            }
        }
        None
    }

    fn trace_back(
        &self,
        parent: &HashMap<&V, EdgeId>,
        source: &V,
        last: EdgeId,
    ) -> AugmentingPath {
        let mut edges = vec![last];
        let mut curr = &self.edge(last).start;
        while curr != source {
            match parent.get(curr) {
                Some(&id) => {
                    edges.push(id);
                    curr = &self.edge(id).start;
                }
                None => break,
            }
        }
        edges.reverse();
        AugmentingPath { edges }
    }

    /// Smallest residual capacity along `path`.
    pub fn bottleneck(&self, path: &AugmentingPath) -> C {
        path.edges
            .iter()
            .map(|&id| self.residual_capacity(id))
            .min()
            .unwrap_or_else(C::zero)
    }

    /// Pushes the bottleneck of `path` along every edge of it and returns the
    /// amount pushed. Seals the network against further insertion.
    pub fn augment(&mut self, path: &AugmentingPath) -> C {
        self.seal();
        let amount = self.bottleneck(path);
        for &id in &path.edges {
            self.apply_flow(id, amount);
        }
        debug!(
            "augmented {:?} along {} edge(s): {:?}",
            amount,
            path.len(),
            self.describe(path)
        );
        amount
    }

    fn describe(&self, path: &AugmentingPath) -> Vec<(&V, &V)> {
        path.edges
            .iter()
            .map(|&id| {
                let edge = self.edge(id);
                (&edge.start, &edge.end)
            })
            .collect()
    }

    /// Computes the maximum flow from `source` to `sink` with Edmonds-Karp.
    ///
    /// Flow is left on the edges; use [`FlowNetwork::flow_summary`] to read the
    /// per-edge assignment. A disconnected or unknown source/sink yields 0.
    ///
    /// # Errors
    /// * `Error::FlowOverflow` - the total does not fit in `C`
    ///
    /// # Complexity
    /// * Time: O(V * E^2)
    /// * Space: O(V + E)
    pub fn max_flow(&mut self, source: &V, sink: &V) -> Result<C> {
        self.seal();
        let mut augmentations = 0usize;
        while let Some(path) = self.find_path(source, sink) {
            self.augment(&path);
            augmentations += 1;
        }
        self.finish(source, sink, augmentations)
    }

    /// Like [`FlowNetwork::max_flow`] but gives up after `limit` augmentations.
    ///
    /// # Errors
    /// * `Error::AugmentationLimit` - an augmenting path still exists after
    ///   `limit` augmentations; the flow pushed so far stays on the edges
    /// * `Error::FlowOverflow` - the total does not fit in `C`
    pub fn max_flow_bounded(&mut self, source: &V, sink: &V, limit: usize) -> Result<C> {
        self.seal();
        let mut augmentations = 0usize;
        while let Some(path) = self.find_path(source, sink) {
            if augmentations == limit {
                debug!("stopping after {} augmentation(s)", limit);
                return Err(Error::AugmentationLimit(limit));
            }
            self.augment(&path);
            augmentations += 1;
        }
        self.finish(source, sink, augmentations)
    }

    fn finish(&self, source: &V, sink: &V, augmentations: usize) -> Result<C> {
        let value = self.flow_value(source)?;
        info!(
            "max flow {:?} -> {:?} is {:?} after {} augmentation(s)",
            source, sink, value, augmentations
        );
        Ok(value)
    }

    /// Net flow leaving `source`: flow on its forward edges minus flow on the
    /// edges entering it (held negated by the residual entries of its list).
    ///
    /// # Errors
    /// * `Error::FlowOverflow` - either sum does not fit in `C`
    pub fn flow_value(&self, source: &V) -> Result<C> {
        let Ok(outgoing) = self.outgoing_edges(source) else {
            return Ok(C::zero());
        };
        let mut outflow = C::zero();
        let mut inflow = C::zero();
        for &id in outgoing {
            let flow = self.edge(id).flow;
            if flow >= C::zero() {
                outflow = outflow.checked_add(&flow).ok_or(Error::FlowOverflow)?;
            } else {
                inflow = inflow.checked_sub(&flow).ok_or(Error::FlowOverflow)?;
            }
        }
        // both sums are non-negative, so the difference cannot overflow
        Ok(outflow - inflow)
    }

    /// Flow and capacity of every inserted edge, in insertion order, together
    /// with the flow value at `source`.
    ///
    /// # Errors
    /// * `Error::FlowOverflow` - the flow value does not fit in `C`
    pub fn flow_summary(&self, source: &V) -> Result<FlowSummary<V, C>> {
        let edges = self
            .forward_edges()
            .map(|(_, e)| EdgeFlow {
                start: e.start.clone(),
                end: e.end.clone(),
                capacity: e.capacity,
                flow: e.flow,
            })
            .collect();
        Ok(FlowSummary {
            max_flow: self.flow_value(source)?,
            edges,
        })
    }
}
