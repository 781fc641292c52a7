use std::{
    env,
    path::{Path, PathBuf},
};

/// Registry location, relative to the install root.
pub const REGISTRY_PATH: &str = ".claude-plugin/marketplace.json";
/// Manifest location, relative to a plugin's source directory.
pub const MANIFEST_SUBPATH: &str = ".claude-plugin/plugin.json";

/// Returns the current working directory.
pub fn get_cwd() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns true if the given directory holds a marketplace registry.
pub fn is_install_root(dir: &Path) -> bool {
    dir.join(REGISTRY_PATH).is_file()
}

/// Walks upward from `start` to locate the first directory holding a registry.
pub fn find_install_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|ancestor| is_install_root(ancestor))
        .map(Path::to_path_buf)
}

/// Resolves the install root. The executable's own ancestors come first,
/// then the directory it was built from, then the ancestors of `cwd`.
/// Falls back to `cwd` so that the registry read reports the missing file.
pub fn resolve_install_root(exe_dir: Option<&Path>, manifest_dir: &Path, cwd: &Path) -> PathBuf {
    exe_dir
        .and_then(find_install_root_from)
        .or_else(|| is_install_root(manifest_dir).then(|| manifest_dir.to_path_buf()))
        .or_else(|| find_install_root_from(cwd))
        .unwrap_or_else(|| cwd.to_path_buf())
}

pub fn get_install_root() -> PathBuf {
    let exe = env::current_exe().ok();
    resolve_install_root(
        exe.as_deref().and_then(Path::parent),
        Path::new(env!("CARGO_MANIFEST_DIR")),
        &get_cwd(),
    )
}

pub fn registry_path(root: &Path) -> PathBuf {
    root.join(REGISTRY_PATH)
}

/// Path of the manifest for a record whose `source` is given, e.g.
/// `./plugins/foo` -> `<root>/plugins/foo/.claude-plugin/plugin.json`.
///
/// Only one leading `./` is stripped. The source is always resolved under
/// `root`, even when it starts with `/`.
pub fn manifest_path(root: &Path, source: &str) -> PathBuf {
    let relative = source.strip_prefix("./").unwrap_or(source);
    let relative = relative.trim_start_matches('/');
    root.join(relative).join(MANIFEST_SUBPATH)
}

/// Normalizes a path to use forward slashes.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}
