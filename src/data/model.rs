use serde::Serialize;

use super::error::LoadError;

/// Columns a trajectory row must provide: `t x y z`.
pub const TRAJECTORY_COLUMNS: usize = 4;

// ---------------------------------------------------------------------------
// NumericMatrix – result of the strict parse, any width
// ---------------------------------------------------------------------------

/// Row-major `f64` buffer where every row has exactly `columns` values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericMatrix {
    columns: usize,
    values: Vec<f64>,
}

impl NumericMatrix {
    /// An empty matrix (no retained rows).
    pub fn empty() -> Self {
        Self {
            columns: 0,
            values: Vec::new(),
        }
    }

    /// Build from a flat buffer. `values.len()` must be a multiple of `columns`.
    pub(crate) fn from_row_major(columns: usize, values: Vec<f64>) -> Self {
        debug_assert!(columns == 0 || values.len() % columns == 0);
        Self { columns, values }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.values.len() / self.columns
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.columns;
        &self.values[start..start + self.columns]
    }

    /// Keep the first four columns as `[t, x, y, z]`.
    ///
    /// An empty matrix is [`LoadError::NoData`]; fewer than four columns is
    /// [`LoadError::TooFewColumns`].
    pub fn into_trajectory(self) -> Result<TrajectoryTable, LoadError> {
        if self.is_empty() {
            return Err(LoadError::NoData);
        }
        if self.columns < TRAJECTORY_COLUMNS {
            return Err(LoadError::TooFewColumns {
                found: self.columns,
            });
        }
        let samples = self
            .values
            .chunks_exact(self.columns)
            .map(|row| TrajectorySample::new(row[0], row[1], row[2], row[3]))
            .collect();
        Ok(TrajectoryTable { samples })
    }
}

// ---------------------------------------------------------------------------
// TrajectorySample – one logged step
// ---------------------------------------------------------------------------

/// One row of the trajectory: time (or index) and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectorySample {
    pub fn new(t: f64, x: f64, y: f64, z: f64) -> Self {
        Self { t, x, y, z }
    }

    /// The trajectory slice: `[x, y, z]`.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.t, self.x, self.y, self.z]
    }
}

impl From<[f64; 4]> for TrajectorySample {
    fn from([t, x, y, z]: [f64; 4]) -> Self {
        Self { t, x, y, z }
    }
}

// ---------------------------------------------------------------------------
// TrajectoryTable – the loaded trajectory
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box of the trajectory positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    pub fn center(&self) -> [f64; 3] {
        std::array::from_fn(|i| 0.5 * (self.min[i] + self.max[i]))
    }

    /// Extent per axis; a flat axis reports `1.0` so it can be divided by.
    pub fn span(&self) -> [f64; 3] {
        std::array::from_fn(|i| {
            let span = self.max[i] - self.min[i];
            if span.abs() < f64::EPSILON || !span.is_finite() {
                1.0
            } else {
                span
            }
        })
    }

    /// Map a position into the unit cube `[-0.5, 0.5]³` centred on the box.
    pub fn normalize(&self, p: [f64; 3]) -> [f64; 3] {
        let center = self.center();
        let span = self.span();
        std::array::from_fn(|i| (p[i] - center[i]) / span[i])
    }
}

/// Non-empty, ordered trajectory. Rows keep file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryTable {
    samples: Vec<TrajectorySample>,
}

impl TrajectoryTable {
    /// Build from samples; an empty list is [`LoadError::NoData`].
    pub fn from_samples(samples: Vec<TrajectorySample>) -> Result<Self, LoadError> {
        if samples.is_empty() {
            return Err(LoadError::NoData);
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Number of samples (always at least one).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Positions in row order.
    pub fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.samples.iter().map(TrajectorySample::position)
    }

    pub fn bounds(&self) -> Bounds {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in self.positions() {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        Bounds { min, max }
    }

    /// Time span covered, first to last sample.
    pub fn duration(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.t - first.t,
            _ => 0.0,
        }
    }
}
