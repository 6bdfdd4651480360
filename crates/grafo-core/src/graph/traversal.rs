use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::{EdgeRecord, EdgeWeight, Vertex};

/// Trait for providing read-only graph adjacency and weights
pub trait GraphProvider<V: Vertex> {
    fn contains(&self, v: &V) -> bool;
    fn vertices(&self) -> &[V];
    fn neighbors(&self, v: &V) -> Result<&[V]>;
    fn weight(&self, a: &V, b: &V) -> Result<EdgeWeight>;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Every undirected edge once, canonicalized and sorted by endpoints
    fn canonical_edges(&self) -> Result<Vec<EdgeRecord<V>>> {
        let mut records = Vec::new();
        for v in self.vertices() {
            for n in self.neighbors(v)? {
                if v < n {
                    let weight = self.weight(v, n)?.weight();
                    records.push(EdgeRecord::new(v.clone(), n.clone(), weight));
                }
            }
        }
        records.sort_by(|x, y| x.from.cmp(&y.from).then_with(|| x.to.cmp(&y.to)));
        Ok(records)
    }
}

impl<V: Vertex> GraphProvider<V> for Graph<V> {
    fn contains(&self, v: &V) -> bool {
        Graph::contains(self, v)
    }

    fn vertices(&self) -> &[V] {
        Graph::vertices(self)
    }

    fn neighbors(&self, v: &V) -> Result<&[V]> {
        Graph::neighbors(self, v)
    }

    fn weight(&self, a: &V, b: &V) -> Result<EdgeWeight> {
        Graph::weight(self, a, b)
    }

    fn canonical_edges(&self) -> Result<Vec<EdgeRecord<V>>> {
        Ok(self.edges())
    }
}
