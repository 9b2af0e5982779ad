//! Nearest-neighbor index over the encoded catalog
//!
//! Wraps the fitted feature matrix exported by the training process. Queries are
//! an exhaustive scan: the catalog is small and the index is never rebuilt at
//! serve time.

use crate::error::{Error, Result};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    /// `minkowski` is the p=2 default metric name of the training library
    #[default]
    #[serde(alias = "minkowski")]
    Euclidean,
    Manhattan,
    Cosine,
}

impl Distance {
    #[inline]
    pub fn between(&self, a: &Vector, b: &Vector) -> f64 {
        match self {
            Distance::Euclidean => a.l2_distance(b),
            Distance::Manhattan => a.manhattan_distance(b),
            Distance::Cosine => 1.0 - a.cosine_similarity(b),
        }
    }
}

/// A catalog row returned by a neighbor query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

#[derive(Deserialize)]
struct RawIndex {
    #[serde(default = "default_n_neighbors")]
    n_neighbors: usize,
    #[serde(default)]
    metric: Distance,
    fit_x: Vec<Vector>,
}

fn default_n_neighbors() -> usize {
    5
}

/// Pre-trained nearest-neighbor index
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawIndex")]
pub struct NeighborIndex {
    n_neighbors: usize,
    metric: Distance,
    dim: usize,
    rows: Vec<Vector>,
}

impl NeighborIndex {
    /// Build an index over fitted rows; row `i` stands for catalog row `i`
    pub fn new(rows: Vec<Vector>, metric: Distance, n_neighbors: usize) -> Result<Self> {
        let dim = rows
            .first()
            .map(Vector::dim)
            .ok_or_else(|| Error::load("neighbor index", "no fitted rows"))?;

        if dim == 0 {
            return Err(Error::load("neighbor index", "fitted rows have zero dimensions"));
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.dim() != dim) {
            return Err(Error::load(
                "neighbor index",
                format!("row {} has {} dimensions, expected {}", i, row.dim(), dim),
            ));
        }

        Ok(Self {
            n_neighbors,
            metric,
            dim,
            rows,
        })
    }

    /// The `k` rows closest to `query`, nearest first.
    ///
    /// Returns `min(k, len())` neighbors. Equal distances are ordered by
    /// ascending row index.
    pub fn query(&self, query: &Vector, k: usize) -> Result<Vec<Neighbor>> {
        if query.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        let mut scored: Vec<Neighbor> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| Neighbor {
                index,
                distance: self.metric.between(query, row),
            })
            .collect();

        scored.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.index.cmp(&b.index))
        });
        scored.truncate(k);
        Ok(scored)
    }

    /// Neighbor count the model was trained with
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    pub fn metric(&self) -> Distance {
        self.metric
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TryFrom<RawIndex> for NeighborIndex {
    type Error = Error;

    fn try_from(raw: RawIndex) -> Result<Self> {
        NeighborIndex::new(raw.fit_x, raw.metric, raw.n_neighbors)
    }
}
