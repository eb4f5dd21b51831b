mod util;
use util::Progress;
mod scan_dir;
use scan_dir::scan_dir;
pub mod verbs;

mod execute;
pub use execute::*;
mod structure;
pub use structure::*;
