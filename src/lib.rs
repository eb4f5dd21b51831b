//! # refpath
//! Rewrite hardcoded `require(...)` paths after a file has moved, and dump directory structures.
//!
//! # Rewriting references
//! Every `.js`/`.ts` file under a root directory is scanned for
//! `require('<some dir>/<target name>')`. Each match is replaced by a call that points
//! at the real location of the target file, relative to the file containing the call.
//!
//! ```no_run
//! use refpath::{refpath, Config};
//!
//! let mut cfg = Config::default();
//! cfg.target_path = "src/data/medicaid_rules_2025.json".into();
//! let summary = refpath(cfg).unwrap();
//! println!("{} file(s) updated", summary.updated);
//! ```
//!
//! # Dumping a structure
//! [`tree`] writes the names of all folders and files under a root to a text file,
//! indented by depth. See [`TreeStyle`] for the available layouts.

mod core;
pub use crate::core::{
    dump_tree, refpath, render_tree, rewrite_file, tree, verbs, Config, Mode, ReferenceMatch,
    ReferencePattern, Refpath, Replacement, RewriteOutcome, Rewritten, Summary, TreeConfig,
    TreeStyle, Verbosity, DEFAULT_TARGET_PATH, REFERENCE_CALL,
};
pub mod error;
mod fs;
pub use crate::fs::{normalize_lexically, relative_path, AbsPath};
