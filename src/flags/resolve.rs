use std::path::{Component, Path, PathBuf};

/// Resolves `path` against `base_dir` without touching the filesystem.
///
/// `.` components are dropped and `..` pops the previous component, so a
/// path that names nothing on disk still resolves. Symlinks are not followed.
pub fn absolutize(
    base_dir: &Path,
    path: &str,
) -> PathBuf {
    let joined = base_dir.join(path);
    let mut out = PathBuf::new();
    for comp in joined.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    dunce::simplified(&out).to_path_buf()
}
