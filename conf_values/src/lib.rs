//! Utilities for working with nested configuration values.
//!
//! Configuration decoded from YAML or JSON arrives as a dynamically typed
//! tree of [`serde_json::Value`] nodes. This crate provides the small set of
//! operations a configuration manager needs on top of that representation:
//! path-addressed reads and writes ([`get_value`], [`set_value`],
//! [`delete_value`]), recursive overlay of override values onto defaults
//! ([`merge_values`]), deep-copy isolation ([`deep_copy_values`]) and a
//! bounded-retry executor ([`do_with_backoff`]) for wrapping fallible
//! operations such as fetching remote configuration.
//!
//! A handful of stateless helpers round out the surface: endpoint splitting
//! ([`host_port`]), placeholder substitution ([`render_template`]), SHA-256
//! digests ([`checksum_hex`]), a thin blocking GET wrapper
//! ([`http_get_bytes`]) and error-message joining ([`join_errors`]).
//!
//! None of the value operations are synchronised; callers sharing a tree
//! across threads must serialise access themselves.

mod checksum;
mod error;
mod merge;
mod net;
mod path;
mod retry;
mod snapshot;
mod template;

pub use checksum::checksum_hex;
pub use error::{ValuesError, join_errors};
pub use merge::merge_values;
pub use net::{host_port, http_get_bytes};
pub use path::{
    delete_value, get_bool, get_number, get_string, get_value, set_string_slice, set_value,
};
pub use retry::do_with_backoff;
pub use snapshot::{deep_copy, deep_copy_values};
pub use template::render_template;

/// Mapping node of the generic value tree.
///
/// Convenience alias for callers constructing roots by hand rather than
/// decoding them.
pub type ValueMap = serde_json::Map<String, serde_json::Value>;
