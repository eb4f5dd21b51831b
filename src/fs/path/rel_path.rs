//! Lexical relative path arithmetic
//!
//! Nothing here touches the file system, except for reading the current
//! directory when the two paths cannot be related otherwise.

use std::path::{Component, Path, PathBuf};

/// Normalize `.` and `..` components without touching the file system.
///
/// Leading `..` of a relative path are kept, since there is nothing to pop.
/// `..` directly under the root is dropped.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }
    out.into_iter().collect()
}

/// Compute the path from the directory containing `from_file` to `to_file`.
///
/// The result always uses `/` as separator. It is `.` if `to_file` is the
/// directory of `from_file` itself, and the bare file name if both sit in the
/// same directory.
///
/// Both paths are normalized lexically and do not need to exist. If one is
/// absolute and the other is not, or the source directory climbs above where
/// it starts (e.g. `../x.ts`), both are anchored at the current directory first.
///
/// # Example
/// ```
/// use refpath::relative_path;
///
/// assert_eq!(
///     relative_path("src/app/main.ts", "src/data/rules.json"),
///     "../data/rules.json"
/// );
/// ```
pub fn relative_path<P, Q>(from_file: P, to_file: Q) -> String
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let from_dir = from_file.as_ref().parent().unwrap_or_else(|| Path::new(""));
    let mut from_dir = normalize_lexically(from_dir);
    let mut to_file = normalize_lexically(to_file.as_ref());

    if needs_anchor(&from_dir, &to_file) {
        match std::env::current_dir() {
            Ok(cwd) => {
                from_dir = normalize_lexically(&cwd.join(&from_dir));
                to_file = normalize_lexically(&cwd.join(&to_file));
            }
            Err(e) => {
                log::warn!("cannot read current directory, relative path may be wrong: {e}");
            }
        }
    }

    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = to_file.components().collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let parts: Vec<String> = std::iter::repeat("..".to_string())
        .take(from.len() - common)
        .chain(
            to[common..]
                .iter()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn needs_anchor(from_dir: &Path, to_file: &Path) -> bool {
    from_dir.is_absolute() != to_file.is_absolute()
        || matches!(from_dir.components().next(), Some(Component::ParentDir))
}
