//! Prerequisite dependency graph.
//!
//! Arena of course nodes indexed by position. Edges point from a course to
//! the prerequisites it needs, and only to prerequisites that are part of
//! the same course set; anything outside the set is not an edge.
//!
//! Traversal state (visited marks, recursion stack) is allocated per call,
//! so a graph can be traversed repeatedly and shared across threads.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::HashMap;

use crate::error::PlanError;
use crate::models::CourseLookup;

/// A course node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Course code.
    pub code: String,
    /// Arena indices of in-set prerequisites, in catalog order.
    pub prerequisites: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InStack,
    Done,
}

/// Dependency graph over a set of courses to schedule.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Builds the graph for `courses`, keeping their first-seen order.
    ///
    /// Courses the catalog does not know get no edges.
    pub fn build<C: CourseLookup + ?Sized>(courses: &[String], catalog: &C) -> Self {
        let mut graph = Self::default();
        for code in courses {
            if !graph.index.contains_key(code) {
                graph.index.insert(code.clone(), graph.nodes.len());
                graph.nodes.push(Node {
                    code: code.clone(),
                    prerequisites: Vec::new(),
                });
            }
        }

        for node_idx in 0..graph.nodes.len() {
            let Some(course) = catalog.course(&graph.nodes[node_idx].code) else {
                continue;
            };
            let mut edges: Vec<usize> = Vec::new();
            for prereq in &course.prerequisites {
                if let Some(&dep) = graph.index.get(prereq) {
                    if !edges.contains(&dep) {
                        edges.push(dep);
                    }
                }
            }
            graph.nodes[node_idx].prerequisites = edges;
        }

        graph
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no courses.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `code` is part of the graph.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// In-set prerequisites of `code`.
    pub fn prerequisites_of(&self, code: &str) -> Vec<&str> {
        self.index
            .get(code)
            .map(|&idx| {
                self.nodes[idx]
                    .prerequisites
                    .iter()
                    .map(|&p| self.nodes[p].code.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Finds a prerequisite cycle, if any.
    ///
    /// DFS with a recursion stack: reaching a node that is still on the
    /// stack closes a cycle. The returned path starts and ends on the same
    /// code, following "requires" edges (`A -> B` means A requires B).
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut stack = Vec::new();

        for node in 0..self.nodes.len() {
            if marks[node] == Mark::Unvisited {
                if let Some(cycle) = self.cycle_dfs(node, &mut marks, &mut stack) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn cycle_dfs(
        &self,
        node: usize,
        marks: &mut [Mark],
        stack: &mut Vec<usize>,
    ) -> Option<Vec<String>> {
        marks[node] = Mark::InStack;
        stack.push(node);

        for &next in &self.nodes[node].prerequisites {
            match marks[next] {
                Mark::InStack => {
                    // Back edge
                    let start = stack.iter().position(|&n| n == next).unwrap_or(0);
                    let mut cycle: Vec<String> = stack[start..]
                        .iter()
                        .map(|&n| self.nodes[n].code.clone())
                        .collect();
                    cycle.push(self.nodes[next].code.clone());
                    return Some(cycle);
                }
                Mark::Unvisited => {
                    if let Some(cycle) = self.cycle_dfs(next, marks, stack) {
                        return Some(cycle);
                    }
                }
                Mark::Done => {}
            }
        }

        stack.pop();
        marks[node] = Mark::Done;
        None
    }

    /// Orders courses so every prerequisite precedes its dependents.
    ///
    /// DFS postorder, starting roots in input order and visiting
    /// prerequisites in catalog order. Courses with no ordering constraint
    /// between them keep their input order, which makes the result
    /// deterministic.
    ///
    /// # Errors
    /// [`PlanError::PrerequisiteCycle`] if the graph is not a DAG.
    pub fn topological_order(&self) -> Result<Vec<String>, PlanError> {
        if let Some(cycle) = self.find_cycle() {
            return Err(PlanError::PrerequisiteCycle { cycle });
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        for node in 0..self.nodes.len() {
            self.postorder(node, &mut visited, &mut order);
        }

        Ok(order
            .into_iter()
            .map(|n| self.nodes[n].code.clone())
            .collect())
    }

    fn postorder(&self, node: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        if visited[node] {
            return;
        }
        visited[node] = true;
        for &dep in &self.nodes[node].prerequisites {
            self.postorder(dep, visited, order);
        }
        order.push(node);
    }
}
