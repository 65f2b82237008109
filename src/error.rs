pub const INVALID_DATE: &str = "Date is invalid";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("unable to query rates: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unable to parse env variables: {0}")]
    Config(#[from] envy::Error),
}

impl Error {
    pub fn invalid_date() -> Self {
        Error::Validation(INVALID_DATE.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
