pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const IMAGE_WINDOW_LABEL: &str = "image";
pub(crate) const SETTINGS_WINDOW_LABEL: &str = "settings";

pub(crate) const TOGGLE_IMAGE_EVENT: &str = "toggle-image";
pub(crate) const TOGGLE_SETTINGS_EVENT: &str = "toggle-settings";
pub(crate) const IMAGE_EVENT: &str = "image";

pub(crate) const DEV_SERVER_URL_ENV: &str = "IRIS_DEV_SERVER_URL";
pub(crate) const TEST_MODE_ENV: &str = "IRIS_TEST_MODE";

pub(crate) const PACKAGED_SCHEME: &str = "app";
pub(crate) const PACKAGED_INDEX_FILE: &str = "index.html";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";

// Windows dev builds read this from stdin; unix takes SIGTERM instead.
#[cfg(any(windows, test))]
pub(crate) const GRACEFUL_EXIT_MESSAGE: &str = "graceful-exit";
