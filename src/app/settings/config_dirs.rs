use directories_next::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "santaDraw")
}

/// Per-user configuration directory for the app, if the platform provides
/// one. Holds `settings.toml` and optional palette files.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory, used for the log file.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}
