use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("renderer backend failure: {0}")]
    Backend(String),

    #[error("render thread failure: {0}")]
    RenderThread(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
