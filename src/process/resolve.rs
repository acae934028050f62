use std::env;
use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Search path used when `PATH` is not set at all.
pub const DEFAULT_PATH: &str = "/usr/bin:/bin";

/// Locates the program a command name refers to.
///
/// A name with a `/` is a path, relative to `cwd` when not absolute, and only
/// has to exist. A bare name is looked up in each `path_var` directory in
/// order and must be an executable regular file there.
pub fn find_executable(name: &str, cwd: &Path, path_var: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if name.contains('/') {
        let candidate = cwd.join(name);
        return match fs::metadata(&candidate) {
            Ok(meta) if !meta.is_dir() => Some(candidate),
            _ => None,
        };
    }

    let path_var = path_var.unwrap_or_else(|| OsStr::new(DEFAULT_PATH));
    env::split_paths(path_var)
        .map(|dir| cwd.join(dir))
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn make_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_search_order_first_match_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let winner = make_file(first.path(), "tool", 0o755);
        make_file(second.path(), "tool", 0o755);

        let path_var = env::join_paths([first.path(), second.path()]).unwrap();
        let found = find_executable("tool", Path::new("/"), Some(path_var.as_os_str()));

        assert_eq!(found, Some(winner));
    }

    #[test]
    fn test_skips_non_executable() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        make_file(first.path(), "tool", 0o644);
        let runnable = make_file(second.path(), "tool", 0o700);

        let path_var = env::join_paths([first.path(), second.path()]).unwrap();
        let found = find_executable("tool", Path::new("/"), Some(path_var.as_os_str()));

        assert_eq!(found, Some(runnable));
    }

    #[test]
    fn test_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tool")).unwrap();
        let path_var = OsString::from(dir.path());
        assert_eq!(find_executable("tool", Path::new("/"), Some(path_var.as_os_str())), None);
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path_var = OsString::from(dir.path());
        assert_eq!(find_executable("nothing", Path::new("/"), Some(path_var.as_os_str())), None);
    }

    #[test]
    fn test_empty_entry_means_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let tool = make_file(dir.path(), "tool", 0o755);
        let path_var = OsString::from(":/nonexistent");
        assert_eq!(find_executable("tool", dir.path(), Some(path_var.as_os_str())), Some(tool));
    }

    #[test]
    fn test_name_with_slash_is_a_path() {
        let dir = tempfile::tempdir().unwrap();
        let script = make_file(dir.path(), "run.sh", 0o644);

        // Existence is enough; launching reports permission problems.
        assert_eq!(
            find_executable("./run.sh", dir.path(), None),
            Some(dir.path().join("./run.sh"))
        );
        assert_eq!(
            find_executable(script.to_str().unwrap(), Path::new("/"), None),
            Some(script)
        );
        assert_eq!(find_executable("./missing", dir.path(), None), None);
    }

    #[test]
    fn test_default_path_has_true() {
        assert!(find_executable("true", Path::new("/"), None).is_some());
    }
}
