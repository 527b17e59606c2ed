//! # Commit Graph
//!
//! Traversal primitives over the commit DAG: ancestor sets, the first-parent
//! log walk, and the approximate least-common-ancestor search merge uses as
//! its split point. Every lookup goes back through the `ObjectStore`, since
//! commits are identified by fingerprint rather than held by owning
//! reference.

use std::collections::{HashSet, VecDeque};

use anyhow::{Context, Result};

use crate::objects::ObjectStore;

pub struct CommitGraph<'a> {
    store: &'a ObjectStore,
}

impl<'a> CommitGraph<'a> {
    pub fn new(store: &'a ObjectStore) -> Self {
        Self { store }
    }

    fn parents_of(&self, fp: &str) -> Result<Vec<String>> {
        let commit = self
            .store
            .get_commit(fp)
            .context("failed to read commit")?
            .with_context(|| format!("dangling commit reference: {fp}"))?;
        Ok(commit.parents())
    }

    /// Ordered parent list for a commit: `{parent1, parent2?}`.
    pub fn parents(&self, fp: &str) -> Result<Vec<String>> {
        self.parents_of(fp)
    }

    /// Every fingerprint reachable from `fp` via any parent edge, including
    /// `fp` itself.
    pub fn ancestors(&self, fp: &str) -> Result<HashSet<String>> {
        let mut seen = HashSet::new();
        let mut stack = vec![fp.to_string()];
        while let Some(current) = stack.pop() {
            if !seen.insert(current.clone()) {
                continue;
            }
            stack.extend(self.parents_of(&current)?);
        }
        Ok(seen)
    }

    /// The sequence of commits following `parent1` from `fp` until there is
    /// no more first parent (collected eagerly, not a lazy iterator).
    pub fn first_parent_walk(&self, fp: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        let mut current = Some(fp.to_string());
        while let Some(fp) = current {
            let commit = self
                .store
                .get_commit(&fp)
                .context("failed to read commit")?
                .with_context(|| format!("dangling commit reference: {fp}"))?;
            out.push(fp);
            current = commit.parent1;
        }
        Ok(out)
    }

    /// The least common ancestor used as the split point for merge.
    ///
    /// This is intentionally an approximate algorithm, not a full
    /// graph-theoretic LCA: short-circuit when one side is an ancestor of
    /// the other, otherwise BFS from `a` — level by level, nodes within a
    /// level in discovery order — and take the first node that's also an
    /// ancestor of `b`. On criss-crossed histories this can differ from the
    /// "true" LCA; that is preserved on purpose.
    pub fn lca(&self, a: &str, b: &str) -> Result<String> {
        let ancestors_of_a = self.ancestors(a)?;
        if ancestors_of_a.contains(b) {
            return Ok(b.to_string());
        }
        let ancestors_of_b = self.ancestors(b)?;
        if ancestors_of_b.contains(a) {
            return Ok(a.to_string());
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(a.to_string());
        visited.insert(a.to_string());

        while let Some(current) = queue.pop_front() {
            if ancestors_of_b.contains(&current) {
                return Ok(current);
            }
            for parent in self.parents_of(&current)? {
                if visited.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        anyhow::bail!("no common ancestor found between {a} and {b}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Commit;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn store(dir: &std::path::Path) -> ObjectStore {
        let store = ObjectStore::new(dir);
        store.init().unwrap();
        store
    }

    #[test]
    fn ancestor_monotonicity() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());
        let graph = CommitGraph::new(&store);

        let root = store.put_commit(&Commit::initial()).unwrap();
        let child = store
            .put_commit(&Commit::new("c1".to_string(), 1, root.clone(), BTreeMap::new()))
            .unwrap();

        let ancestors = graph.ancestors(&child).unwrap();
        assert!(ancestors.contains(&child));
        assert!(ancestors.contains(&root));
    }

    #[test]
    fn first_parent_walk_follows_single_chain() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());
        let graph = CommitGraph::new(&store);

        let root = store.put_commit(&Commit::initial()).unwrap();
        let c1 = store
            .put_commit(&Commit::new("c1".to_string(), 1, root.clone(), BTreeMap::new()))
            .unwrap();
        let c2 = store
            .put_commit(&Commit::new("c2".to_string(), 2, c1.clone(), BTreeMap::new()))
            .unwrap();

        let walk = graph.first_parent_walk(&c2).unwrap();
        assert_eq!(walk, vec![c2, c1, root]);
    }

    #[test]
    fn lca_of_ancestor_and_descendant_is_the_ancestor() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());
        let graph = CommitGraph::new(&store);

        let root = store.put_commit(&Commit::initial()).unwrap();
        let child = store
            .put_commit(&Commit::new("c1".to_string(), 1, root.clone(), BTreeMap::new()))
            .unwrap();

        assert_eq!(graph.lca(&child, &root).unwrap(), root);
        assert_eq!(graph.lca(&root, &child).unwrap(), root);
    }

    #[test]
    fn lca_of_diverged_branches_is_the_fork_point() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());
        let graph = CommitGraph::new(&store);

        let root = store.put_commit(&Commit::initial()).unwrap();
        let left = store
            .put_commit(&Commit::new("left".to_string(), 1, root.clone(), BTreeMap::new()))
            .unwrap();
        let right = store
            .put_commit(&Commit::new("right".to_string(), 1, root.clone(), BTreeMap::new()))
            .unwrap();

        assert_eq!(graph.lca(&left, &right).unwrap(), root);
    }
}
