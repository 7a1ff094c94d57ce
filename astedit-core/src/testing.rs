//! Testing utilities
//!
//! Two tools shared by unit tests, integration tests and downstream crates:
//!
//! 1. [TreeBuilder](testing_factories::TreeBuilder) builds small trees in code, one node at a
//!    time, returning the id of each node so it can be wired into its parent.
//! 2. [testing_assertions] checks fragment trees by their visible text instead of by their
//!    full structure, which keeps tests readable when only the output order matters.
//!
//! ```rust-example
//! let mut b = TreeBuilder::new();
//! let a = b.ident("a");
//! let one = b.number(1.0);
//! let sum = b.binary("+", a, one);
//! let tree = b.finish(sum);
//! assert_leaf_texts(&render(&tree, Some(sum)).unwrap(), &["a", "+", "1"]);
//! ```
//!
//! Trees loaded from JSON are covered by the fixtures under `tests/fixtures/`, read through
//! [fixture_path].

pub mod testing_assertions;
pub mod testing_factories;

pub use testing_assertions::{assert_leaf_texts, leaf_texts};
pub use testing_factories::TreeBuilder;

/// Absolute path of a JSON fixture shipped with this crate.
pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
