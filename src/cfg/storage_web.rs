use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use serde::Deserialize;

/// The config is a JSON object stored under this key.
const CONFIG_KEY: &str = "/solar-system-demo | config";

pub(super) fn load<T: for<'a> Deserialize<'a>>() -> Result<T, LoadError> {
    LocalStorage::get(CONFIG_KEY)
}

pub(super) fn is_not_found(error: &LoadError) -> bool {
    matches!(error, StorageError::KeyNotFound(_))
}

pub type LoadError = StorageError;
