//! Comparator and hash-policy abstractions for the container types.
//!
//! Ordered containers take a [`Comparator`] that defines a total order over
//! their keys; hash containers take a [`HashPolicy`] that defines hashing and
//! equality. Both are cheap to clone (the closures are shared behind `Arc`)
//! and carry a name for debugging.
//!
//! Equality in ordered containers is defined exclusively by
//! `compare(a, b) == Ordering::Equal`.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Type alias for comparison functions
type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Type alias for key-validity predicates
type ValidateFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Type alias for hash functions
type HashFn<T> = Arc<dyn Fn(&T) -> u64 + Send + Sync>;

/// Type alias for equality functions
type EqualityFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A named total-order strategy over keys of type `T`.
///
/// A comparator may carry a validity policy: keys failing it are rejected by
/// the ordered containers with [`ContainerError::InvalidKey`] before any
/// structural change happens. The stock example is [`Comparator::total_f64`],
/// which orders floats totally but refuses `NaN`.
///
/// [`ContainerError::InvalidKey`]: crate::error::ContainerError::InvalidKey
pub struct Comparator<T: ?Sized> {
    /// Comparison function
    compare_fn: CompareFn<T>,
    /// Optional key-validity predicate
    validate_fn: Option<ValidateFn<T>>,
    /// Name for debugging
    name: String,
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            compare_fn: self.compare_fn.clone(),
            validate_fn: self.validate_fn.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> Comparator<T> {
    /// Creates a new comparator with a custom comparison function.
    pub fn new<C>(name: impl Into<String>, compare_fn: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare_fn: Arc::new(compare_fn),
            validate_fn: None,
            name: name.into(),
        }
    }

    /// Creates the natural comparator from the key type's `Ord` instance.
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::new("natural", |a: &T, b: &T| a.cmp(b))
    }

    /// Creates the reverse of the natural comparator.
    pub fn reverse() -> Self
    where
        T: Ord,
    {
        Self::new("reverse", |a: &T, b: &T| b.cmp(a))
    }

    /// Creates a comparator that orders by an extracted sort key.
    pub fn by_key<K, F>(name: impl Into<String>, extract: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(name, move |a: &T, b: &T| extract(a).cmp(&extract(b)))
    }

    /// Attaches a key-validity predicate to this comparator.
    pub fn with_validator<F>(mut self, validate_fn: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.validate_fn = Some(Arc::new(validate_fn));
        self
    }

    /// Returns a comparator with the same validity policy and the opposite
    /// order.
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        let inner = self.compare_fn.clone();
        Self {
            compare_fn: Arc::new(move |a, b| inner(b, a)),
            validate_fn: self.validate_fn.clone(),
            name: format!("{}-reversed", self.name),
        }
    }

    /// Compares two keys using this comparator.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare_fn)(a, b)
    }

    /// Tests two keys for comparator equality.
    pub fn eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Checks a key against the validity policy (no policy accepts all keys).
    pub fn validate(&self, key: &T) -> bool {
        self.validate_fn.as_ref().map(|f| f(key)).unwrap_or(true)
    }

    /// Gets the name of this comparator.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Comparator<f64> {
    /// Total order over `f64` that rejects `NaN` through the validity policy.
    pub fn total_f64() -> Self {
        Self::new("total-f64", |a: &f64, b: &f64| a.total_cmp(b))
            .with_validator(|v: &f64| !v.is_nan())
    }
}

impl Comparator<f32> {
    /// Total order over `f32` that rejects `NaN` through the validity policy.
    pub fn total_f32() -> Self {
        Self::new("total-f32", |a: &f32, b: &f32| a.total_cmp(b))
            .with_validator(|v: &f32| !v.is_nan())
    }
}

impl<T: Ord> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> std::fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Comparator({})", self.name)
    }
}

/// A named hashing strategy for the hash-based containers.
///
/// Pairs a hash function with the equality predicate that bucket scans use.
/// The two must agree: equal keys hash identically.
pub struct HashPolicy<T: ?Sized> {
    /// Hash function
    hash_fn: HashFn<T>,
    /// Equality function
    eq_fn: EqualityFn<T>,
    /// Name for debugging
    name: String,
}

impl<T: ?Sized> Clone for HashPolicy<T> {
    fn clone(&self) -> Self {
        Self {
            hash_fn: self.hash_fn.clone(),
            eq_fn: self.eq_fn.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> HashPolicy<T> {
    /// Creates a new hash policy from custom hash and equality functions.
    pub fn new<H, E>(name: impl Into<String>, hash_fn: H, eq_fn: E) -> Self
    where
        H: Fn(&T) -> u64 + Send + Sync + 'static,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            hash_fn: Arc::new(hash_fn),
            eq_fn: Arc::new(eq_fn),
            name: name.into(),
        }
    }

    /// Creates the standard policy from the key type's `Hash` and `Eq`
    /// instances.
    pub fn standard() -> Self
    where
        T: Hash + Eq,
    {
        Self::new(
            "standard",
            |key: &T| {
                let mut hasher = DefaultHasher::new();
                key.hash(&mut hasher);
                hasher.finish()
            },
            |a: &T, b: &T| a == b,
        )
    }

    /// Hashes a key using this policy.
    pub fn hash(&self, key: &T) -> u64 {
        (self.hash_fn)(key)
    }

    /// Tests equality of two keys using this policy.
    pub fn eq(&self, a: &T, b: &T) -> bool {
        (self.eq_fn)(a, b)
    }

    /// Gets the name of this policy.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HashPolicy<String> {
    /// Case-insensitive policy for string keys.
    pub fn string_ci() -> Self {
        Self::new(
            "string-ci",
            |s: &String| {
                let mut hasher = DefaultHasher::new();
                s.to_lowercase().hash(&mut hasher);
                hasher.finish()
            },
            |a: &String, b: &String| a.to_lowercase() == b.to_lowercase(),
        )
    }
}

impl<T: Hash + Eq> Default for HashPolicy<T> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T> std::fmt::Debug for HashPolicy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HashPolicy({})", self.name)
    }
}
