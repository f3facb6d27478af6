//! Item types that can be clustered.
//!
//! An item needs a distance to another item of its own type and a mean over a
//! non-empty collection. `Bounded` adds what the range initializer needs on
//! top of that: a bounding box and uniform sampling inside it.

use crate::error::KMeansError;
use ndarray::Array1;
use rand::Rng;
use std::fmt::Debug;

/// A point-like value with a distance and a mean.
///
/// `distance` must be non-negative and symmetric, and should be zero only for
/// equal items. `PartialEq` is used to deduplicate centroids and to detect the
/// fixed point of the iteration.
pub trait Metric: Clone + PartialEq + Debug {
    /// Distance between `self` and `other`
    fn distance(&self, other: &Self) -> f64;

    /// Mean of a non-empty collection.
    ///
    /// For `Array1<f64>` the inherent `ArrayBase::mean` takes precedence over
    /// this method in path calls, so write `<Array1<f64> as Metric>::mean`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `items` is empty.
    fn mean(items: &[Self]) -> Result<Self, KMeansError>;

    /// Check that all items can be compared with each other.
    /// Fixed-size types have nothing to check.
    fn check_compatible(items: &[Self]) -> Result<(), KMeansError> {
        match items.first() {
            Some(first) => Self::check_compatible_with(first, items),
            None => Ok(()),
        }
    }

    /// Check that every item of `items` can be compared with `reference`
    fn check_compatible_with(_reference: &Self, _items: &[Self]) -> Result<(), KMeansError> {
        Ok(())
    }
}

/// Items with a per-axis ordering, which the range initializer samples from.
pub trait Bounded: Metric {
    /// Per-axis minimum and maximum over `items`
    fn bounds(items: &[Self]) -> Result<(Self, Self), KMeansError>;

    /// A random item with every coordinate drawn uniformly from `[lo, hi]`
    fn sample_within<R: Rng + ?Sized>(lo: &Self, hi: &Self, rng: &mut R) -> Self;
}

fn empty_mean() -> KMeansError {
    KMeansError::InvalidArgument("cannot take the mean of an empty collection".to_string())
}

fn empty_bounds() -> KMeansError {
    KMeansError::InvalidArgument("cannot compute bounds of an empty collection".to_string())
}

/// Uniform draw from `[lo, hi]` that stays finite when `hi - lo` overflows
fn uniform_between<R: Rng + ?Sized>(lo: f64, hi: f64, rng: &mut R) -> f64 {
    let t: f64 = rng.gen();
    let span = hi - lo;
    let v = if span.is_finite() {
        lo + t * span
    } else {
        lo * (1.0 - t) + hi * t
    };
    v.max(lo).min(hi)
}

macro_rules! impl_scalar_metric {
    ($($t:ty),*) => {$(
        impl Metric for $t {
            #[inline]
            fn distance(&self, other: &Self) -> f64 {
                (*self as f64 - *other as f64).abs()
            }

            fn mean(items: &[Self]) -> Result<Self, KMeansError> {
                if items.is_empty() {
                    return Err(empty_mean());
                }
                let sum: f64 = items.iter().map(|&v| v as f64).sum();
                Ok((sum / items.len() as f64) as $t)
            }
        }

        impl Bounded for $t {
            fn bounds(items: &[Self]) -> Result<(Self, Self), KMeansError> {
                let first = *items.first().ok_or_else(empty_bounds)?;
                Ok(items
                    .iter()
                    .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
            }

            fn sample_within<R: Rng + ?Sized>(lo: &Self, hi: &Self, rng: &mut R) -> Self {
                (uniform_between(*lo as f64, *hi as f64, rng) as $t)
                    .max(*lo)
                    .min(*hi)
            }
        }
    )*};
}

impl_scalar_metric!(f32, f64);

/// A coordinate in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Metric for Point2 {
    /// Euclidean distance
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Per-axis mean
    fn mean(items: &[Self]) -> Result<Self, KMeansError> {
        if items.is_empty() {
            return Err(empty_mean());
        }
        let n = items.len() as f64;
        let (sx, sy) = items
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Ok(Point2::new(sx / n, sy / n))
    }
}

impl Bounded for Point2 {
    fn bounds(items: &[Self]) -> Result<(Self, Self), KMeansError> {
        let first = *items.first().ok_or_else(empty_bounds)?;
        Ok(items.iter().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    fn sample_within<R: Rng + ?Sized>(lo: &Self, hi: &Self, rng: &mut R) -> Self {
        let x = uniform_between(lo.x, hi.x, rng);
        let y = uniform_between(lo.y, hi.y, rng);
        Point2::new(x, y)
    }
}

/// n-dimensional vectors, Euclidean
impl Metric for Array1<f64> {
    fn distance(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.len(), other.len());
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    fn mean(items: &[Self]) -> Result<Self, KMeansError> {
        let first = items.first().ok_or_else(empty_mean)?;
        Self::check_compatible(items)?;

        let mut sum = Array1::<f64>::zeros(first.len());
        for item in items {
            sum += item;
        }
        Ok(sum / items.len() as f64)
    }

    fn check_compatible_with(reference: &Self, items: &[Self]) -> Result<(), KMeansError> {
        match items.iter().position(|v| v.len() != reference.len()) {
            Some(i) => Err(KMeansError::InvalidArgument(format!(
                "Expected {} features, item {} has {}",
                reference.len(),
                i,
                items[i].len()
            ))),
            None => Ok(()),
        }
    }
}

impl Bounded for Array1<f64> {
    fn bounds(items: &[Self]) -> Result<(Self, Self), KMeansError> {
        let first = items.first().ok_or_else(empty_bounds)?;
        Self::check_compatible(items)?;

        let mut lo = first.clone();
        let mut hi = first.clone();
        for item in &items[1..] {
            for (j, &v) in item.iter().enumerate() {
                lo[j] = lo[j].min(v);
                hi[j] = hi[j].max(v);
            }
        }
        Ok((lo, hi))
    }

    fn sample_within<R: Rng + ?Sized>(lo: &Self, hi: &Self, rng: &mut R) -> Self {
        lo.iter()
            .zip(hi.iter())
            .map(|(&l, &h)| uniform_between(l, h, rng))
            .collect()
    }
}
