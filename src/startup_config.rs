use std::{
    env,
    sync::atomic::{AtomicBool, Ordering},
};

use url::Url;

use crate::{DEV_SERVER_URL_ENV, TEST_MODE_ENV};

#[derive(Debug, Clone)]
pub(crate) struct StartupConfig {
    pub(crate) dev_server_url: Option<Url>,
    pub(crate) development: bool,
    pub(crate) test_mode: bool,
}

impl StartupConfig {
    pub(crate) fn resolve<F>(log: F) -> Self
    where
        F: Fn(&str),
    {
        Self::from_snapshot(
            tauri::is_dev(),
            env::var(DEV_SERVER_URL_ENV).ok().as_deref(),
            env::var(TEST_MODE_ENV).ok().as_deref(),
            log,
        )
    }

    pub(crate) fn from_snapshot<F>(
        development: bool,
        dev_server_url: Option<&str>,
        test_mode: Option<&str>,
        log: F,
    ) -> Self
    where
        F: Fn(&str),
    {
        let dev_server_url = dev_server_url.and_then(|raw| match normalize_dev_server_url(raw) {
            Ok(url) => url,
            Err(error) => {
                log(&format!(
                    "ignoring {DEV_SERVER_URL_ENV}: {error}; falling back to packaged content"
                ));
                None
            }
        });

        Self {
            dev_server_url,
            development,
            test_mode: test_mode.map(is_truthy_flag).unwrap_or(false),
        }
    }

    pub(crate) fn devtools_enabled(&self) -> bool {
        self.development && !self.test_mode
    }
}

// Empty values mean packaged mode; malformed or non-http values are an error.
pub(crate) fn normalize_dev_server_url(raw: &str) -> Result<Option<Url>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("invalid URL '{trimmed}': {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(Some(parsed)),
        scheme => Err(format!(
            "unsupported dev-server scheme '{scheme}', only http/https are allowed"
        )),
    }
}

fn is_truthy_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) config: StartupConfig,
    primary_open: AtomicBool,
}

impl ShellState {
    pub(crate) fn new(config: StartupConfig) -> Self {
        Self {
            config,
            primary_open: AtomicBool::new(false),
        }
    }

    pub(crate) fn mark_primary_open(&self) {
        self.primary_open.store(true, Ordering::Release);
    }

    pub(crate) fn mark_primary_closed(&self) {
        self.primary_open.store(false, Ordering::Release);
    }

    pub(crate) fn is_primary_open(&self) -> bool {
        self.primary_open.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_log(_: &str) {}

    #[test]
    fn from_snapshot_accepts_dev_server_url() {
        let config = StartupConfig::from_snapshot(
            true,
            Some("http://localhost:8080"),
            None,
            no_log,
        );
        assert_eq!(
            config.dev_server_url.as_ref().map(Url::as_str),
            Some("http://localhost:8080/")
        );
        assert!(config.devtools_enabled());
    }

    #[test]
    fn from_snapshot_rejects_malformed_url_without_panicking() {
        let config = StartupConfig::from_snapshot(true, Some("not a url"), None, no_log);
        assert!(config.dev_server_url.is_none());
    }

    #[test]
    fn from_snapshot_rejects_non_http_scheme() {
        assert!(normalize_dev_server_url("ftp://localhost:8080").is_err());
    }

    #[test]
    fn empty_dev_server_env_means_packaged_mode() {
        assert_eq!(normalize_dev_server_url("   "), Ok(None));
    }

    #[test]
    fn test_mode_disables_devtools() {
        let config = StartupConfig::from_snapshot(
            true,
            Some("http://localhost:8080"),
            Some("1"),
            no_log,
        );
        assert!(config.test_mode);
        assert!(!config.devtools_enabled());
    }

    #[test]
    fn production_disables_devtools() {
        let config = StartupConfig::from_snapshot(false, None, None, no_log);
        assert!(!config.devtools_enabled());
    }

    #[test]
    fn truthy_flag_accepts_common_forms() {
        assert!(is_truthy_flag("1"));
        assert!(is_truthy_flag("TRUE"));
        assert!(is_truthy_flag(" yes "));
        assert!(!is_truthy_flag("0"));
        assert!(!is_truthy_flag(""));
    }

    #[test]
    fn shell_state_tracks_primary_window() {
        let state = ShellState::new(StartupConfig::from_snapshot(false, None, None, no_log));
        assert!(!state.is_primary_open());
        state.mark_primary_open();
        assert!(state.is_primary_open());
        state.mark_primary_closed();
        assert!(!state.is_primary_open());
    }
}
