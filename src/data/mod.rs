//! Data layer: core types, line filtering, and loading.
//!
//! Architecture:
//! ```text
//!   levelthree.txt
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  skip header, keep lines whose first token is a number
//!   └──────────┘
//!        │  Vec<RetainedLine>
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  strict uniform-width parse → NumericMatrix
//!   └──────────┘
//!        │  first four columns
//!        ▼
//!   ┌─────────────────┐
//!   │ TrajectoryTable  │  non-empty Vec<TrajectorySample>
//!   └─────────────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
