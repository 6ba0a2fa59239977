//! CVSS 3.1 Base Score calculator.
//!
//! A host collects one label per Base metric into a [`Selection`], then calls
//! [`compute_score`] and [`encode_vector`] after every change, or lets a
//! [`Calculator`] session do that bookkeeping.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod session;
pub mod severity;
pub mod types;
pub mod vector;

pub use engine::{compute_score, compute_score_with, Formula};
pub use error::{CvssError, Result};
pub use session::{Calculator, Outcome, ScoreOutput};
pub use severity::Severity;
pub use types::metric::MetricKey;
pub use types::selection::{BaseMetrics, Selection};
pub use vector::{decode_vector, encode_vector};
