//! Shared test utilities for the Rainier crates
//!
//! - `TestDataBuilder`: deterministic names, point ids and vectors derived
//!   from a test name
//! - `assertions`: assertion helpers with readable failure messages
//! - `init_test_tracing`: opt-in log output for a failing test
//!
//! # Usage
//!
//! ```
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let database = builder.name("db", "main");
//! let vector = builder.vector(4, 0);
//! assert_eq!(vector.len(), 4);
//! assert!(database.starts_with("test-db-"));
//! ```

use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

/// Builder for test data with deterministic randomization
///
/// The same test name always yields the same names and vectors, so failures
/// are reproducible.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_collection");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for a database or collection
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("collection", "main"), "test-collection-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate `count` distinct names sharing a prefix
    pub fn names(&self, prefix: &str, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| self.name(prefix, &i.to_string()))
            .collect()
    }

    /// Generate a point id
    pub fn point_id(&self, index: usize) -> String {
        format!("point-{}-{}", self.seed, index)
    }

    /// Generate a deterministic vector of `dimension` components in `[0, 1)`
    ///
    /// Different `index` values give different vectors for the same seed.
    pub fn vector(&self, dimension: usize, index: usize) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));
        StandardUniform
            .sample_iter(&mut rng)
            .take(dimension)
            .collect()
    }
}

/// Install a test-friendly tracing subscriber writing to the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::{Debug, Display};

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a result failed and its message contains `needle`
    pub fn assert_err_contains<T: Debug, E: Display>(
        result: Result<T, E>,
        needle: &str,
        context: &str,
    ) {
        match result {
            Ok(value) => panic!(
                "{}: expected error containing '{}', got Ok({:?})",
                context, needle, value
            ),
            Err(err) => {
                let message = err.to_string();
                assert!(
                    message.contains(needle),
                    "{}: expected error containing '{}', got '{}'",
                    context,
                    needle,
                    message
                );
            }
        }
    }

    /// Assert that two slices hold the same elements regardless of order
    pub fn assert_same_elements<T: Ord + Clone + Debug>(actual: &[T], expected: &[T], context: &str) {
        let mut actual = actual.to_vec();
        let mut expected = expected.to_vec();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected, "{}: element sets differ", context);
    }
}
