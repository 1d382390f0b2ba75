//! Dense rounded-Euclidean distance matrix.

use crate::error::{Error, Result};
use crate::models::{check_objective_range, Instance};

/// Rounds half up (`⌊x + 0.5⌋`), not to even.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// A dense n×n integer distance matrix stored in row-major order.
///
/// Built once per instance and shared read-only by every strategy and
/// trial. Entries are symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use selective_tsp::models::Instance;
/// use selective_tsp::distance::DistanceMatrix;
///
/// let inst = Instance::new(vec![(0.0, 0.0), (3.0, 4.0), (0.0, 7.5)], vec![1, 1, 1]).unwrap();
/// let dm = DistanceMatrix::from_instance(&inst).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(0, 2), 8); // 7.5 rounds up
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the rounded Euclidean matrix of an instance in O(n²).
    ///
    /// Fails with [`Error::InvalidInstance`] if the instance has fewer than
    /// two nodes.
    pub fn from_instance(instance: &Instance) -> Result<Self> {
        let n = instance.len();
        if n < 2 {
            return Err(Error::invalid_instance(format!(
                "need at least 2 nodes, got {n}"
            )));
        }
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = round_half_up(instance.euclidean(i, j));
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { data, size: n })
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// The grid must be square, symmetric, non-negative and have a zero
    /// diagonal, with at least two locations. Entries so large that a
    /// cycle over all locations could overflow `i64` are rejected.
    pub fn from_data(size: usize, data: Vec<i64>) -> Result<Self> {
        if size < 2 {
            return Err(Error::invalid_instance(format!(
                "need at least 2 nodes, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(Error::invalid_instance(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        for i in 0..size {
            if dm.get(i, i) != 0 {
                return Err(Error::invalid_instance(format!(
                    "non-zero diagonal at {i}"
                )));
            }
            for j in (i + 1)..size {
                if dm.get(i, j) < 0 || dm.get(i, j) != dm.get(j, i) {
                    return Err(Error::invalid_instance(format!(
                        "entries ({i},{j}) and ({j},{i}) must be equal and non-negative"
                    )));
                }
            }
        }
        check_objective_range(size, dm.max_distance(), 0)?;
        Ok(dm)
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Largest entry in the matrix.
    pub fn max_distance(&self) -> i64 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `D[i,j] == D[j,i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns the row of distances from `from` to every location.
    pub fn row(&self, from: usize) -> &[i64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }
}
