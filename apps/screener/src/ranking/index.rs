//! Exact nearest-neighbor search over a flat list of vectors.
//!
//! Ranking always asks for every candidate, so a linear scan plus sort is the
//! whole index: no partitioning, no approximation.

use std::cmp::Ordering;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    #[error("vector {position} has dimension {actual}, index expects {expected}")]
    Vector {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("query has dimension {actual}, index expects {expected}")]
    Query { expected: usize, actual: usize },
}

/// One search hit: the position the vector was added at, and its squared L2 distance.
///
/// Distances are accumulated in f64 so that large but finite f32 components
/// cannot overflow to infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

/// Flat index using squared Euclidean distance.
#[derive(Debug)]
pub struct FlatL2Index {
    dim: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatL2Index {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn add(&mut self, vector: Vec<f32>) -> Result<(), IndexError> {
        if vector.len() != self.dim {
            return Err(IndexError::Vector {
                position: self.vectors.len(),
                expected: self.dim,
                actual: vector.len(),
            });
        }
        self.vectors.push(vector);
        Ok(())
    }

    pub fn add_all<I>(&mut self, vectors: I) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = Vec<f32>>,
    {
        for vector in vectors {
            self.add(vector)?;
        }
        Ok(())
    }

    /// Returns the `k` closest vectors to `query`, nearest first.
    /// Equal distances keep insertion order. `k` larger than the index returns everything.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError> {
        if query.len() != self.dim {
            return Err(IndexError::Query {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| Neighbor {
                index,
                distance: squared_l2(query, vector),
            })
            .collect();

        // sort_by is stable, so ties stay in insertion order
        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });
        neighbors.truncate(k);

        Ok(neighbors)
    }
}

pub fn squared_l2(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum()
}
