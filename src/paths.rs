use std::path::{Path, PathBuf};

/// Resolved file locations for claimdesk.
/// Pure data structure with no I/O.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Directory holding everything claimdesk writes
    /// Example: ~/.local/share/claimdesk/
    pub data_dir: PathBuf,

    /// Log file (the terminal belongs to the UI, so logs go here)
    /// Example: ~/.local/share/claimdesk/claimdesk.log
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolves paths under `$HOME/.local/share/claimdesk`.
    ///
    /// Falls back to `/tmp` when `HOME` is unset. Does NOT create
    /// directories; that is the caller's responsibility.
    pub fn resolve() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        Self::under(Path::new(&home))
    }

    /// Same layout as [`Paths::resolve`], rooted at `base` instead of `$HOME`.
    ///
    /// ```
    /// use std::path::Path;
    /// use claimdesk::paths::Paths;
    ///
    /// let paths = Paths::under(Path::new("/home/user"));
    /// assert_eq!(
    ///     paths.log_file,
    ///     Path::new("/home/user/.local/share/claimdesk/claimdesk.log")
    /// );
    /// ```
    pub fn under(base: &Path) -> Self {
        let data_dir = base.join(".local").join("share").join("claimdesk");
        Self {
            log_file: data_dir.join("claimdesk.log"),
            data_dir,
        }
    }
}
