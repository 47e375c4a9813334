//
//  Copyright (C) 2025-2026  Mohamed Aly
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
//

use crate::util::anyerror::Fault;
use std::path::{Component, Path, PathBuf};

pub enum Unit {
    MegaBytes,
    Bytes,
}

impl Unit {
    /// Returns the divisor number to convert to the `self` unit.
    fn value(&self) -> usize {
        match self {
            Self::MegaBytes => 1000000,
            Self::Bytes => 1,
        }
    }
}

/// Calculates the size of the given path.
pub fn compute_size<P>(path: &P, unit: Unit) -> Result<f32, Fault>
where
    P: AsRef<Path>,
{
    Ok(fs_extra::dir::get_size(&path)? as f32 / unit.value() as f32)
}

pub trait Standardize {
    /// Transforms `p` into an absolute, lexically normalized path.
    fn standardize<T: Into<PathBuf>>(p: T) -> PathBuf;
}

impl Standardize for PathBuf {
    fn standardize<T: Into<PathBuf>>(p: T) -> PathBuf {
        let p: PathBuf = p.into();
        // expand the home directory shorthand
        let p = match p.strip_prefix("~") {
            Ok(rest) => match home::home_dir() {
                Some(h) => h.join(rest),
                None => p,
            },
            Err(_) => p,
        };
        let p = match p.is_relative() {
            true => match std::env::current_dir() {
                Ok(cwd) => cwd.join(p),
                Err(_) => p,
            },
            false => p,
        };
        normalize(&p)
    }
}

/// Removes `.` components and folds `..` components without touching the file system.
pub fn normalize(p: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for comp in p.components() {
        match comp {
            Component::CurDir => (),
            Component::ParentDir => {
                if result.pop() == false {
                    result.push(comp.as_os_str());
                }
            }
            _ => result.push(comp.as_os_str()),
        }
    }
    result
}

/// Converts a path into a string with forward slashes.
pub fn into_std_str(p: PathBuf) -> String {
    p.display().to_string().replace('\\', "/")
}

/// Resolves `p` against `root` when `p` is relative.
///
/// Helpful for resolving paths written in configuration files, which are
/// relative to the project root.
pub fn resolve_rel_path(root: &Path, p: &Path) -> PathBuf {
    match p.is_relative() {
        true => normalize(&root.join(p)),
        false => p.to_path_buf(),
    }
}

/// Checks if `path` is a directory with zero entries.
pub fn is_empty_dir(path: &Path) -> Result<bool, Fault> {
    Ok(std::fs::read_dir(path)?.next().is_none())
}

/// Checks if `path` is a regular file that can be executed.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Checks if `path` is a regular file that can be executed.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_folds_components() {
        assert_eq!(
            normalize(&PathBuf::from("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize(&PathBuf::from("a/b/..")), PathBuf::from("a"));
    }

    #[test]
    fn standardize_is_absolute() {
        let p = PathBuf::standardize("rtl/../firmware");
        assert_eq!(p.is_absolute(), true);
        assert_eq!(p, std::env::current_dir().unwrap().join("firmware"));
    }

    #[test]
    fn resolve_only_relative() {
        let root = PathBuf::from("/projects/soc");
        assert_eq!(
            resolve_rel_path(&root, &PathBuf::from("docs/plantuml.jar")),
            PathBuf::from("/projects/soc/docs/plantuml.jar")
        );
        assert_eq!(
            resolve_rel_path(&root, &PathBuf::from("/opt/plantuml.jar")),
            PathBuf::from("/opt/plantuml.jar")
        );
    }

    #[test]
    fn std_str_uses_forward_slashes() {
        assert_eq!(into_std_str(PathBuf::from("a\\b")), "a/b");
    }

    #[test]
    fn empty_dir_detection() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(is_empty_dir(dir.path()).unwrap(), true);
        std::fs::write(dir.path().join("README.md"), "").unwrap();
        assert_eq!(is_empty_dir(dir.path()).unwrap(), false);
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("xvlog");
        std::fs::write(&file, "#!/bin/sh\n").unwrap();
        assert_eq!(is_executable(&file), false);
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(is_executable(&file), true);
        assert_eq!(is_executable(dir.path()), false);
    }
}
