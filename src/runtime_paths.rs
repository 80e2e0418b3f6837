use std::{env, path::PathBuf};

// `~/.iris` unless IRIS_ROOT overrides it.
pub(crate) fn default_app_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var("IRIS_ROOT") {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(".iris"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::default_app_root_dir;

    // One test mutates IRIS_ROOT, so both cases run in sequence here.
    #[test]
    fn iris_root_env_overrides_the_home_default() {
        std::env::set_var("IRIS_ROOT", "/tmp/iris-test-root");
        assert_eq!(
            default_app_root_dir(),
            Some(PathBuf::from("/tmp/iris-test-root"))
        );

        std::env::set_var("IRIS_ROOT", "   ");
        let fallback = default_app_root_dir();
        assert!(fallback.is_none() || fallback != Some(PathBuf::from("   ")));

        std::env::remove_var("IRIS_ROOT");
    }
}
