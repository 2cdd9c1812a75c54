//! Path algebra and typed-value codec for YANG-modeled configuration trees
//!
//! Two building blocks used by schema-aware configuration stores:
//!
//! - [`path`]: an XPath-like addressing scheme (`origin:/a/b[k=v]/c`) with a
//!   parser, a renderer, normalisation, absolute/relative conversion and a
//!   total ordering so paths can be used as map keys.
//! - [`value`] and [`convert`]: a tagged union over every YANG leaf value
//!   kind, plus the schema-directed conversion engine that turns raw strings
//!   into typed values under the constraints of a [`schema::SchemaLeafType`].
//!
//! ```
//! use sdc_yangpath::{Path, SchemaLeafType, from_string};
//!
//! let path = Path::parse("/interface[name=eth0]/admin-state").unwrap();
//! assert_eq!(path.to_xpath(false), "/interface[name=eth0]/admin-state");
//!
//! let value = from_string(&SchemaLeafType::new("uint8"), "200", 0).unwrap();
//! assert_eq!(value.to_string(), "200");
//! ```

#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod path;
pub mod schema;
pub mod value;

// Re-export main types
pub use convert::{ConversionError, from_string, to_yang_type};
pub use error::{Result, YangPathError};
pub use path::{Path, PathElem, PathError, PathSet, Paths, compare_paths};
pub use schema::{Number, SchemaElem, SchemaLeafType, YangType};
pub use value::{Decimal64, IdentityRef, TypedValue, Value, compare_values};
