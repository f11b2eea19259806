//! Interceptors applied to every slot read and write.

/// Transforms values on their way into and out of an entry's slots.
///
/// Both methods default to identity. Implementations can clamp, validate,
/// or derive values; the entry applies `before_set` when seeding its slots
/// from the default as well.
pub trait ValueHooks<T>: Send + Sync {
    fn before_get(&self, value: T) -> T {
        value
    }

    fn before_set(&self, value: T) -> T {
        value
    }
}

/// Passes values through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> ValueHooks<T> for Identity {}

/// Clamps written values into `min..=max`.
///
/// `min` is checked first, so a range with `min > max` stores `min` for low
/// values and `max` for high ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Clamp<T> {
    min: T,
    max: T,
}

impl<T> Clamp<T> {
    #[must_use]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T: PartialOrd + Clone + Send + Sync> ValueHooks<T> for Clamp<T> {
    fn before_set(&self, value: T) -> T {
        if value < self.min {
            self.min.clone()
        } else if value > self.max {
            self.max.clone()
        } else {
            value
        }
    }
}
