use thiserror::Error;

use crate::model::SettingsError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
