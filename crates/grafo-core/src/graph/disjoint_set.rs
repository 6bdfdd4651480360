//! Disjoint-set (union-find) over graph vertices
//!
//! Every vertex starts as its own root. [`DisjointSet::find`] applies full
//! path compression iteratively: one pass locates the root, a second pass
//! points every visited vertex straight at it. [`DisjointSet::union`]
//! attaches the root of its second argument under the root of its first.

use crate::error::{GrafoError, Result};
use crate::graph::types::Vertex;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    parent: HashMap<V, V>,
    sets: usize,
}

impl<V: Vertex> DisjointSet<V> {
    /// Singleton set for each vertex; repeated vertices are collapsed
    pub fn new<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let parent: HashMap<V, V> = vertices
            .into_iter()
            .map(|v| (v.clone(), v.clone()))
            .collect();
        let sets = parent.len();
        DisjointSet { parent, sets }
    }

    /// Representative of the set containing `v`
    pub fn find(&mut self, v: &V) -> Result<V> {
        let mut root = self.parent_of(v)?.clone();
        loop {
            let next = self.parent_of(&root)?;
            if *next == root {
                break;
            }
            root = next.clone();
        }

        let mut current = v.clone();
        while current != root {
            let next = self.parent_of(&current)?.clone();
            if let Some(p) = self.parent.get_mut(&current) {
                *p = root.clone();
            }
            current = next;
        }

        Ok(root)
    }

    /// Merge the sets of `a` and `b`. Returns false if already merged.
    pub fn union(&mut self, a: &V, b: &V) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }
        self.parent.insert(root_b, root_a);
        self.sets -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, a: &V, b: &V) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn parent_of(&self, v: &V) -> Result<&V> {
        self.parent
            .get(v)
            .ok_or_else(|| GrafoError::unknown_vertex(v))
    }
}
