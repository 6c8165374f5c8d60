use directories::ProjectDirs;
use std::{
    env,
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{self, Read},
    path::PathBuf,
    sync::LazyLock,
};

use serde::Deserialize;

/// Overrides the config file location when set.
const CONFIG_PATH_VAR: &str = "SOLAR_SYSTEM_DEMO_CONFIG";

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("org", "solar-system-demo", "solar_system_demo"));
static CONFIG_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    if let Some(path) = env::var_os(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    PROJECT_DIRS
        .as_ref()
        .map(|dir| dir.config_dir().join("config.toml"))
});

pub(super) fn load<T: for<'d> Deserialize<'d>>() -> Result<T, LoadError> {
    let path = CONFIG_PATH.as_ref().ok_or(LoadError::NoConfigDirectory)?;
    let mut file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(LoadError::OpenFile)?;

    let mut string = String::new();
    file.read_to_string(&mut string)
        .map_err(LoadError::ReadFile)?;
    drop(file);

    log::debug!("read config from {}", path.display());
    parse(&string)
}

fn parse<T: for<'d> Deserialize<'d>>(string: &str) -> Result<T, LoadError> {
    toml::from_str(string).map_err(LoadError::Deserialize)
}

pub(super) fn is_not_found(error: &LoadError) -> bool {
    matches!(error, LoadError::OpenFile(e) if e.kind() == io::ErrorKind::NotFound)
}

#[derive(Debug)]
pub enum LoadError {
    NoConfigDirectory,
    OpenFile(io::Error),
    ReadFile(io::Error),
    Deserialize(toml::de::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NoConfigDirectory => write!(f, "No reasonable config directory was found"),
            LoadError::OpenFile(error) => write!(f, "OpenFile: {error}"),
            LoadError::ReadFile(error) => write!(f, "ReadFile: {error}"),
            LoadError::Deserialize(error) => write!(f, "Deserialize: {error}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::NoConfigDirectory => None,
            LoadError::OpenFile(error) | LoadError::ReadFile(error) => Some(error),
            LoadError::Deserialize(error) => Some(error),
        }
    }
}
