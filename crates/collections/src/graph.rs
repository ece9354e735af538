//! Directed graph over an insertion-ordered adjacency map.
//!
//! Vertices are string labels; `vertices` maps each label to the ordered
//! list of its outgoing neighbor labels. An undirected edge is stored as two
//! directed edges. The map invariant: once any operation returns, every
//! label appearing in a neighbor list is also a vertex key: edges are
//! rejected unless both endpoints exist, and removing a vertex purges it
//! from every neighbor list.
//!
//! Mutation problems (duplicate vertex, edge with a missing endpoint,
//! removing an absent vertex) are advisory [`GraphError`]s: the operation
//! is a no-op and the caller decides whether the condition matters.

use std::collections::{HashMap, HashSet};
use std::fmt;

use indexmap::IndexMap;

use crate::deque::Deque;
use crate::error::GraphError;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: IndexMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with an empty neighbor list.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<(), GraphError> {
        let label = label.into();
        if self.vertices.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label));
        }
        self.vertices.insert(label, Vec::new());
        Ok(())
    }

    /// Add the directed edge `src -> dst`. Parallel edges are permitted;
    /// endpoints must already be vertices.
    pub fn add_edge(&mut self, src: &str, dst: &str) -> Result<(), GraphError> {
        if !self.vertices.contains_key(src) || !self.vertices.contains_key(dst) {
            return Err(GraphError::MissingEndpoint {
                src: src.to_owned(),
                dst: dst.to_owned(),
            });
        }
        if let Some(neighbors) = self.vertices.get_mut(src) {
            neighbors.push(dst.to_owned());
        }
        Ok(())
    }

    /// Remove a vertex and purge it from every other neighbor list.
    pub fn remove_vertex(&mut self, label: &str) -> Result<(), GraphError> {
        if self.vertices.shift_remove(label).is_none() {
            return Err(GraphError::VertexNotFound(label.to_owned()));
        }
        for neighbors in self.vertices.values_mut() {
            neighbors.retain(|neighbor| neighbor != label);
        }
        Ok(())
    }

    /// Relabel a vertex in place, rewiring every reference to it.
    pub fn update_vertex(&mut self, old: &str, new: impl Into<String>) -> Result<(), GraphError> {
        let Some(edges) = self.vertices.shift_remove(old) else {
            return Err(GraphError::VertexNotFound(old.to_owned()));
        };
        let new = new.into();
        for neighbors in self.vertices.values_mut() {
            for neighbor in neighbors.iter_mut() {
                if neighbor == old {
                    new.clone_into(neighbor);
                }
            }
        }
        self.vertices.insert(new, edges);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn neighbors(&self, label: &str) -> Option<&[String]> {
        self.vertices.get(label).map(Vec::as_slice)
    }

    pub fn all_vertices(&self) -> Vec<&str> {
        self.vertices.keys().map(String::as_str).collect()
    }

    pub fn all_edges(&self) -> Vec<(&str, &str)> {
        self.vertices
            .iter()
            .flat_map(|(src, neighbors)| {
                neighbors
                    .iter()
                    .map(move |dst| (src.as_str(), dst.as_str()))
            })
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Shortest path in the unweighted graph, found breadth-first.
    ///
    /// The frontier is a [`Deque`] used as a FIFO; a visited set prevents
    /// re-enqueueing; a parent-pointer map reconstructs the path backward
    /// from `end`. `start == end` (both present) yields `[start]`.
    pub fn bfs(&self, start: &str, end: &str) -> Result<Vec<String>, GraphError> {
        if !self.has_vertex(start) || !self.has_vertex(end) {
            return Err(Self::no_route(start, end));
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut parent: HashMap<&str, Option<&str>> = HashMap::new();
        let mut frontier: Deque<&str> = Deque::new();

        frontier.push_back(start);
        visited.insert(start);
        parent.insert(start, None);

        while let Ok(current) = frontier.pop_front() {
            if current == end {
                break;
            }
            if let Some(neighbors) = self.vertices.get(current) {
                for neighbor in neighbors {
                    if visited.insert(neighbor.as_str()) {
                        parent.insert(neighbor, Some(current));
                        frontier.push_back(neighbor);
                    }
                }
            }
        }

        Self::reconstruct(&parent, start, end)
    }

    /// Depth-first path query. Explicit stack, not recursion, so traversal
    /// depth never grows the call stack; neighbors are pushed in
    /// reverse-insertion order so the visit order matches the recursive
    /// formulation. Returns *a* path, not necessarily the shortest.
    pub fn dfs(&self, start: &str, end: &str) -> Result<Vec<String>, GraphError> {
        if !self.has_vertex(start) || !self.has_vertex(end) {
            return Err(Self::no_route(start, end));
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut parent: HashMap<&str, Option<&str>> = HashMap::new();
        let mut stack = vec![start];
        parent.insert(start, None);

        while let Some(current) = stack.pop() {
            if current == end {
                break;
            }
            if visited.insert(current) {
                if let Some(neighbors) = self.vertices.get(current) {
                    for neighbor in neighbors.iter().rev() {
                        if !visited.contains(neighbor.as_str()) {
                            parent.insert(neighbor, Some(current));
                            stack.push(neighbor);
                        }
                    }
                }
            }
        }

        Self::reconstruct(&parent, start, end)
    }

    fn no_route(start: &str, end: &str) -> GraphError {
        GraphError::RouteNotFound {
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }

    fn reconstruct(
        parent: &HashMap<&str, Option<&str>>,
        start: &str,
        end: &str,
    ) -> Result<Vec<String>, GraphError> {
        if !parent.contains_key(end) {
            return Err(Self::no_route(start, end));
        }
        let mut path = Vec::new();
        let mut curr = Some(end);
        while let Some(label) = curr {
            path.push(label.to_owned());
            curr = parent.get(label).copied().flatten();
        }
        path.reverse();
        Ok(path)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return write!(f, "Graph is empty");
        }
        let mut first = true;
        for (vertex, neighbors) in &self.vertices {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{vertex} -> {neighbors:?}")?;
        }
        Ok(())
    }
}
