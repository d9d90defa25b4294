use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first means the start node, last means the end node
    route: Vec<T>,
}

#[cfg(test)]
impl<T> DepRoute<T> {
    fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph; an edge `from -> to` means `to` reads `from`.
#[derive(Debug)]
pub struct Graph<Node, Edge = ()>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    nodes: BTreeSet<Node>,
    routes: Vec<(Node, Edge, Node)>,
}

impl<Node, Edge> Default for Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node, Edge> Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            routes: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: BTreeSet::new(),
            routes: Vec::with_capacity(capacity),
        }
    }

    /// Registers a node without edges so it still shows up in the ordering.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    pub fn route_to(&mut self, from: Node, to: Node, via: Edge) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.routes.push((from, via, to));
    }

    fn in_degrees(&self) -> BTreeMap<Node, usize> {
        let mut in_degrees: BTreeMap<Node, usize> =
            self.nodes.iter().map(|node| (*node, 0)).collect();

        for (_from, _via, to) in &self.routes {
            *in_degrees.entry(*to).or_insert(0) += 1;
        }

        in_degrees
    }

    /// Kahn's algorithm. Every node appears after all nodes it depends on;
    /// ties are broken by `Ord` so the order is deterministic.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degrees = self.in_degrees();
        let mut order = Vec::with_capacity(in_degrees.len());

        while !in_degrees.is_empty() {
            let Some(node) = in_degrees
                .iter()
                .find(|(_, degree)| **degree == 0)
                .map(|(node, _)| *node)
            else {
                let keys: Vec<Node> = in_degrees.keys().copied().collect();
                let route = self.find_cycle(&keys).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route }));
            };

            in_degrees.remove(&node);
            for connected in self.direct_connected_nodes(node)? {
                if let Some(degree) = in_degrees.get_mut(&connected) {
                    *degree -= 1;
                }
            }
            order.push(node);
        }

        Ok(order)
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        let mut visited = BTreeSet::new();
        let mut path_set = BTreeSet::new();
        let mut path = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        let neighbours = |node: Node| {
            self.direct_connected_nodes(node)
                .unwrap_or_default()
                .into_iter()
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        for &start_node in nodes {
            if visited.contains(&start_node) {
                continue;
            }

            stack.push((start_node, neighbours(start_node)));
            visited.insert(start_node);
            path_set.insert(start_node);
            path.push(start_node);

            while let Some((current_node, next)) = stack.last_mut() {
                if let Some(neighbour) = next.next() {
                    if path_set.contains(&neighbour) {
                        if let Some(pos) = path.iter().position(|&x| x == neighbour) {
                            let mut cycle = path[pos..].to_vec();
                            cycle.push(neighbour);
                            return Some(cycle);
                        }
                    } else if !visited.contains(&neighbour) {
                        visited.insert(neighbour);
                        path_set.insert(neighbour);
                        path.push(neighbour);
                        stack.push((neighbour, neighbours(neighbour)));
                    }
                } else {
                    let node_to_remove = *current_node;
                    stack.pop();
                    path_set.remove(&node_to_remove);
                    path.pop();
                }
            }
        }
        None
    }

    fn direct_connected_nodes(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, _via, to) in &self.routes {
            if from == &node && !collected.insert(*to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![node, *to],
                }));
            }
        }

        Ok(collected)
    }
}
