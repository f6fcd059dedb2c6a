//! # hoi4-script-core
//!
//! Decoder for the brace-delimited script format used by Hearts of Iron IV
//! content files (`common/units/*.txt` and friends).
//!
//! The format is a stream of whitespace-separated tokens with `#` comments.
//! Blocks in braces are either key/value maps or flat lists of bare words, and
//! the decoder works out which one each block is from what it contains.
//!
//! ## Quick start
//!
//! ```rust
//! use hoi4_script_core::{decode, Value};
//!
//! let tree = decode("infantry = { max_strength = 25 categories = { category_front_line } }").unwrap();
//! let infantry = tree.get("infantry").unwrap();
//! assert_eq!(infantry.get("max_strength"), Some(&Value::Integer(25)));
//! assert_eq!(
//!     infantry.get("categories").and_then(Value::as_sequence),
//!     Some(&["category_front_line".to_string()][..])
//! );
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] — text → lazy token stream
//! - [`coerce`] — token → integer / float / string
//! - [`decoder`] — token stream → [`Value`] tree
//! - [`types`] — [`Value`] and [`Mapping`]
//! - [`layout`] — conventional installation directories
//! - [`batch`] — decode a whole directory
//! - [`units`] — air / land / sea unit buckets
//! - [`error`] — error types

pub mod batch;
pub mod coerce;
pub mod decoder;
pub mod error;
pub mod layout;
pub mod tokenizer;
pub mod types;
pub mod units;

pub use batch::{decode_dir, decode_dir_with, DirectoryParse};
pub use coerce::parse_scalar;
pub use decoder::{
    decode, decode_file, decode_file_with, decode_reader, decode_reader_with, decode_with,
    ParseOptions, Resolver, DEFAULT_MAX_DEPTH,
};
pub use error::ScriptError;
pub use layout::InstallLayout;
pub use tokenizer::{tokenize, Token, TokenKind, Tokens};
pub use types::{Mapping, Value};
pub use units::{
    classify_install, classify_install_with, classify_units, UnitBuckets, UnitClassification,
};
