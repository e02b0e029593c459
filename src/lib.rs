mod error;
mod fraction;
pub mod input;
pub mod menu;
pub mod opts;
pub mod report;
pub mod traits;

pub use error::{Error, Stage};
pub use fraction::{ContinuedFraction, Fraction, SimpleFraction};
pub use menu::Coefficients;
pub use opts::{get_opts, Mode, Opts};
pub use traits::{Evaluate, Tolerance};

/// Magnitude below which coefficients and denominators are treated as zero
pub const EPSILON: f64 = 1e-12;
