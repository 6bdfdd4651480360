use crate::error::{GrafoError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Identifier of a graph vertex.
///
/// Any cloneable, hashable, totally ordered and printable type qualifies.
/// The total order is what canonicalizes undirected pairs and breaks ties.
pub trait Vertex: Clone + Eq + Ord + Hash + fmt::Display + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Ord + Hash + fmt::Display + fmt::Debug {}

/// Weight of a single undirected edge.
///
/// Always finite and non-negative, so it carries a total order. Negative
/// zero is stored as zero. Sums saturate at `f64::MAX` instead of
/// overflowing to infinity.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Weight assumed for unweighted edges unless configured otherwise
    pub const DEFAULT: Weight = Weight(1.0);

    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(GrafoError::InvalidWeight {
                value: value.to_string(),
            });
        }
        // -0.0 + 0.0 == +0.0
        Ok(Weight(value + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight((self.0 + other.0).min(f64::MAX))
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(value as f64)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Weight {
    type Err = GrafoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| GrafoError::InvalidWeight {
                value: s.to_string(),
            })?;
        Weight::new(value)
    }
}

/// Result of looking up the weight between two known vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeWeight {
    /// The edge exists and carries a weight
    Weighted(Weight),
    /// The edge exists but was added without a weight
    Unweighted,
    /// The vertices are not adjacent
    NoEdge,
}

impl EdgeWeight {
    pub fn is_edge(&self) -> bool {
        !matches!(self, EdgeWeight::NoEdge)
    }

    /// The stored weight, if any
    pub fn weight(&self) -> Option<Weight> {
        match self {
            EdgeWeight::Weighted(w) => Some(*w),
            _ => None,
        }
    }
}

/// One edge of an algorithm result or of a graph's edge listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord<V> {
    pub from: V,
    pub to: V,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl<V: Vertex> EdgeRecord<V> {
    pub fn new(from: V, to: V, weight: Option<Weight>) -> Self {
        EdgeRecord { from, to, weight }
    }

    /// Same edge with endpoints ordered `from <= to`
    pub fn canonical(&self) -> Self {
        let (from, to) = canonical_pair(&self.from, &self.to);
        EdgeRecord {
            from: from.clone(),
            to: to.clone(),
            weight: self.weight,
        }
    }

    /// True if this record joins `a` and `b` in either orientation
    pub fn joins(&self, a: &V, b: &V) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

impl<V: fmt::Display> fmt::Display for EdgeRecord<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} -- {} ({})", self.from, self.to, w),
            None => write!(f, "{} -- {}", self.from, self.to),
        }
    }
}

/// Order an undirected pair by the vertex total order
pub fn canonical_pair<'a, V: Ord>(a: &'a V, b: &'a V) -> (&'a V, &'a V) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Algorithm that produced a spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Kruskal,
    Prim,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
        }
    }

    /// Whether the algorithm minimizes total weight
    pub fn is_mst(&self) -> bool {
        matches!(self, Algorithm::Kruskal | Algorithm::Prim)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = GrafoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            other => Err(GrafoError::invalid_value(
                "algorithm (expected: bfs, dfs, kruskal, prim)",
                other,
            )),
        }
    }
}

/// What `add_edge` does when the pair is already connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateEdgePolicy {
    /// Fail with `DuplicateEdge`
    #[default]
    Reject,
    /// Keep the existing edge and weight
    Ignore,
    /// Keep the existing edge, replace its weight
    Overwrite,
}

impl std::str::FromStr for DuplicateEdgePolicy {
    type Err = GrafoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(DuplicateEdgePolicy::Reject),
            "ignore" => Ok(DuplicateEdgePolicy::Ignore),
            "overwrite" => Ok(DuplicateEdgePolicy::Overwrite),
            other => Err(GrafoError::invalid_value(
                "duplicate edge policy (expected: reject, ignore, overwrite)",
                other,
            )),
        }
    }
}

/// Outcome of a successful `add_edge`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    Added,
    Ignored,
    Overwritten,
}

/// How the MST algorithms treat edges that carry no weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnweightedPolicy {
    /// Treat the edge as having this weight
    Default(Weight),
    /// Fail with `MissingWeight`
    Reject,
}

impl Default for UnweightedPolicy {
    fn default() -> Self {
        UnweightedPolicy::Default(Weight::DEFAULT)
    }
}

/// Options for Kruskal and Prim
#[derive(Debug, Clone, Copy, Default)]
pub struct MstOptions {
    pub unweighted: UnweightedPolicy,
}

impl MstOptions {
    /// Weight used for ordering the edge `from`-`to`
    pub fn resolve<V: fmt::Display>(&self, from: &V, to: &V, weight: EdgeWeight) -> Result<Weight> {
        match (weight, self.unweighted) {
            (EdgeWeight::Weighted(w), _) => Ok(w),
            (_, UnweightedPolicy::Default(w)) => Ok(w),
            (_, UnweightedPolicy::Reject) => Err(GrafoError::missing_weight(from, to)),
        }
    }
}

/// How much of a source graph a result tree reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Vertices present in the result
    pub covered: usize,
    /// Vertices in the source graph
    pub total: usize,
    /// Connected pieces of the result (1 for a single tree)
    pub components: usize,
}

impl Coverage {
    /// One tree over every source vertex. A forest is partial even when
    /// it covers every vertex (Kruskal on a disconnected graph).
    pub fn is_complete(&self) -> bool {
        self.covered >= self.total && self.components <= 1
    }

    /// A warning when the result does not span the whole graph.
    /// Never an error: partial trees and forests are valid results.
    pub fn warning(&self) -> Option<DisconnectedResultWarning> {
        if self.is_complete() {
            None
        } else {
            Some(DisconnectedResultWarning {
                covered: self.covered,
                total: self.total,
                components: self.components,
            })
        }
    }
}

/// Result does not span every vertex of its source graph in one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisconnectedResultWarning {
    pub covered: usize,
    pub total: usize,
    pub components: usize,
}

impl DisconnectedResultWarning {
    /// Vertices of the source graph absent from the result
    pub fn missing(&self) -> usize {
        self.total.saturating_sub(self.covered)
    }
}

impl fmt::Display for DisconnectedResultWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components > 1 {
            write!(
                f,
                "result is a forest of {} trees over {} of {} vertices",
                self.components, self.covered, self.total
            )
        } else {
            write!(
                f,
                "result covers {} of {} vertices ({} unreachable)",
                self.covered,
                self.total,
                self.missing()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_default() {
        assert_eq!(Weight::DEFAULT.value(), 1.0);
        assert_eq!(Weight::default(), Weight::from(1));
    }

    #[test]
    fn test_weight_rejects_negative_and_nan() {
        assert!(matches!(
            Weight::new(-1.0),
            Err(GrafoError::InvalidWeight { .. })
        ));
        assert!(Weight::new(f64::NAN).is_err());
        assert!(Weight::new(f64::INFINITY).is_err());
        assert!(Weight::new(0.0).is_ok());
    }

    #[test]
    fn test_weight_ordering_and_sum() {
        let mut weights = vec![Weight::from(3), Weight::new(0.5).unwrap(), Weight::from(2)];
        weights.sort();
        assert_eq!(weights[0].value(), 0.5);
        let total: Weight = weights.into_iter().sum();
        assert_eq!(total.value(), 5.5);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let w = Weight::new(-0.0).unwrap();
        assert_eq!(w, Weight::ZERO);
        assert_eq!(w.to_string(), "0");
        assert_eq!("-0".parse::<Weight>().unwrap(), Weight::ZERO);
    }

    #[test]
    fn test_sum_saturates_at_max() {
        let big = Weight::new(1e308).unwrap();
        let total: Weight = [big, big, big].into_iter().sum();
        assert!(total.value().is_finite());
        assert_eq!(total.value(), f64::MAX);
        assert_eq!(big + Weight::ZERO, big);
    }

    #[test]
    fn test_weight_parse() {
        assert_eq!("4".parse::<Weight>().unwrap(), Weight::from(4));
        assert_eq!("2.5".parse::<Weight>().unwrap().value(), 2.5);
        assert!("abc".parse::<Weight>().is_err());
        assert!("-3".parse::<Weight>().is_err());
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::from(4).to_string(), "4");
        assert_eq!(Weight::new(1.5).unwrap().to_string(), "1.5");
    }

    #[test]
    fn test_edge_record_canonical() {
        let edge = EdgeRecord::new("N", "M", Some(Weight::from(1)));
        let canon = edge.canonical();
        assert_eq!(canon.from, "M");
        assert_eq!(canon.to, "N");
        assert!(edge.joins(&"M", &"N"));
        assert!(!edge.joins(&"M", &"A"));
    }

    #[test]
    fn test_edge_record_display() {
        let weighted = EdgeRecord::new("A", "E", Some(Weight::from(4)));
        assert_eq!(weighted.to_string(), "A -- E (4)");
        let unweighted = EdgeRecord::new("A", "E", None);
        assert_eq!(unweighted.to_string(), "A -- E");
    }

    #[test]
    fn test_mst_options_resolve() {
        let opts = MstOptions::default();
        assert_eq!(
            opts.resolve(&"A", &"B", EdgeWeight::Unweighted).unwrap(),
            Weight::DEFAULT
        );
        assert_eq!(
            opts.resolve(&"A", &"B", EdgeWeight::Weighted(Weight::from(7)))
                .unwrap(),
            Weight::from(7)
        );

        let strict = MstOptions {
            unweighted: UnweightedPolicy::Reject,
        };
        assert!(matches!(
            strict.resolve(&"A", &"B", EdgeWeight::Unweighted),
            Err(GrafoError::MissingWeight { .. })
        ));
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("Kruskal".parse::<Algorithm>().unwrap(), Algorithm::Kruskal);
        assert!("astar".parse::<Algorithm>().is_err());
        assert!(Algorithm::Prim.is_mst());
        assert!(!Algorithm::Bfs.is_mst());
    }

    #[test]
    fn test_coverage_warning() {
        let full = Coverage {
            covered: 4,
            total: 4,
            components: 1,
        };
        assert!(full.warning().is_none());

        let partial = Coverage {
            covered: 3,
            total: 5,
            components: 1,
        };
        let warning = partial.warning().unwrap();
        assert_eq!(warning.missing(), 2);
        assert_eq!(
            warning.to_string(),
            "result covers 3 of 5 vertices (2 unreachable)"
        );

        let forest = Coverage {
            covered: 5,
            total: 5,
            components: 2,
        };
        assert_eq!(
            forest.warning().unwrap().to_string(),
            "result is a forest of 2 trees over 5 of 5 vertices"
        );
    }
}
