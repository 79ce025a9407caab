use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::ClaimdeskError;

/// Route `log` output to `log_file`, appending.
///
/// `RUST_LOG` wins over `default_filter`. The terminal belongs to the UI,
/// so nothing is ever written to stdout/stderr.
pub fn init(log_file: &Path, default_filter: &str) -> Result<(), ClaimdeskError> {
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| ClaimdeskError::Logging(format!("{}: {}", dir.display(), e)))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| ClaimdeskError::Logging(format!("{}: {}", log_file.display(), e)))?;

    Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| ClaimdeskError::Logging(e.to_string()))
}
