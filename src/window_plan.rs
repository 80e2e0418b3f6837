use url::Url;

use crate::{
    StartupConfig, IMAGE_WINDOW_LABEL, MAIN_WINDOW_LABEL, PACKAGED_INDEX_FILE, PACKAGED_SCHEME,
    SETTINGS_WINDOW_LABEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowKind {
    Main,
    Image,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClosePolicy {
    HideInstead,
    AllowDestroy,
}

impl WindowKind {
    pub(crate) const ALL: [WindowKind; 3] =
        [WindowKind::Main, WindowKind::Image, WindowKind::Settings];

    pub(crate) fn label(self) -> &'static str {
        match self {
            WindowKind::Main => MAIN_WINDOW_LABEL,
            WindowKind::Image => IMAGE_WINDOW_LABEL,
            WindowKind::Settings => SETTINGS_WINDOW_LABEL,
        }
    }

    pub(crate) fn from_label(label: &str) -> Option<WindowKind> {
        match label {
            MAIN_WINDOW_LABEL => Some(WindowKind::Main),
            IMAGE_WINDOW_LABEL => Some(WindowKind::Image),
            SETTINGS_WINDOW_LABEL => Some(WindowKind::Settings),
            _ => None,
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            WindowKind::Main => "Iris",
            WindowKind::Image => "Iris Image",
            WindowKind::Settings => "Iris Settings",
        }
    }

    pub(crate) fn inner_size(self) -> (f64, f64) {
        match self {
            WindowKind::Main => (800.0, 600.0),
            WindowKind::Image | WindowKind::Settings => (400.0, 400.0),
        }
    }

    pub(crate) fn initially_visible(self) -> bool {
        !matches!(self, WindowKind::Settings)
    }

    pub(crate) fn parented_to_main(self) -> bool {
        !matches!(self, WindowKind::Main)
    }

    pub(crate) fn close_policy(self) -> ClosePolicy {
        match self {
            WindowKind::Main => ClosePolicy::AllowDestroy,
            WindowKind::Image | WindowKind::Settings => ClosePolicy::HideInstead,
        }
    }

    fn view_fragment(self) -> Option<&'static str> {
        match self {
            WindowKind::Main => None,
            WindowKind::Image => Some("image"),
            WindowKind::Settings => Some("settings"),
        }
    }
}

// Unknown labels keep Tauri's default destroy behavior.
pub(crate) fn close_policy_for_label(label: &str) -> ClosePolicy {
    WindowKind::from_label(label)
        .map(WindowKind::close_policy)
        .unwrap_or(ClosePolicy::AllowDestroy)
}

pub(crate) fn content_url(kind: WindowKind, config: &StartupConfig) -> Result<Url, String> {
    match &config.dev_server_url {
        Some(base) => dev_view_url(base, kind),
        None => packaged_view_url(kind),
    }
}

pub(crate) fn dev_view_url(base: &Url, kind: WindowKind) -> Result<Url, String> {
    let raw = match kind.view_fragment() {
        None => return Ok(base.clone()),
        Some(view) => format!("{}/#/{}", base.as_str().trim_end_matches('/'), view),
    };

    Url::parse(&raw).map_err(|error| format!("invalid dev view URL '{raw}': {error}"))
}

pub(crate) fn packaged_view_url(kind: WindowKind) -> Result<Url, String> {
    let raw = match kind.view_fragment() {
        None => format!("{PACKAGED_SCHEME}://localhost/{PACKAGED_INDEX_FILE}"),
        Some(view) => format!("{PACKAGED_SCHEME}://localhost/{PACKAGED_INDEX_FILE}#{view}"),
    };

    Url::parse(&raw).map_err(|error| format!("invalid packaged view URL '{raw}': {error}"))
}
