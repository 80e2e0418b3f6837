use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn append_line(path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    writeln!(file, "{line}")
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

fn append_tagged(tag: &str, message: &str) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("[{timestamp}] [{tag}] {message}");
    let path = resolve_desktop_log_path(runtime_paths::default_app_root_dir(), DESKTOP_LOG_FILE);

    if let Err(error) = append_line(&path, &line) {
        eprintln!("{error}");
    }
    println!("{line}");
}

pub(crate) fn append_desktop_log(message: &str) {
    append_tagged("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_tagged("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_tagged("shutdown", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_nests_under_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/iris-root")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/iris-root/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_without_root_uses_bare_file_name() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert_eq!(path, PathBuf::from("desktop.log"));
    }

    #[test]
    fn append_line_creates_missing_directories_and_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs").join("desktop.log");

        append_line(&path, "first").expect("first append");
        append_line(&path, "second").expect("second append");

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "first\nsecond\n");
    }
}
