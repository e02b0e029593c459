use crate::error::Error;
use num_traits::Float;

/// Floating point types that share the crate-wide tolerance used by
/// coefficient validation and denominator guards
pub trait Tolerance: Float {
    fn tolerance() -> Self;

    /// Magnitude below the tolerance, treated as zero
    #[inline]
    fn is_near_zero(self) -> bool {
        self.abs() < Self::tolerance()
    }

    #[inline]
    fn is_near(self, target: Self) -> bool {
        (self - target).is_near_zero()
    }
}

macro_rules! impl_tolerance {
    ($T:ty) => {
        impl Tolerance for $T {
            #[inline]
            fn tolerance() -> Self {
                crate::EPSILON as $T
            }
        }
    };
}
impl_tolerance!(f32);
impl_tolerance!(f64);

/// The evaluation contract shared by every fraction variant
pub trait Evaluate<T> {
    /// Formula of the function together with its current coefficients
    fn describe(&self) -> String;

    /// Value of the function at `x`, failing when a denominator vanishes
    fn evaluate(&self, x: T) -> Result<T, Error>;
}
