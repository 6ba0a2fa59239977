use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvssError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CvssError {
    /// True for errors caused by the metric selection rather than the environment.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            CvssError::UnknownMetric(_) | CvssError::InvalidSelection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CvssError>;
