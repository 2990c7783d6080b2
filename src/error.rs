use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid date value: `{input}`")]
    InvalidDate { input: String },

    #[error("unknown month code: `{code}`")]
    UnknownMonthCode { code: String },

    #[error("invalid color: `{input}`")]
    InvalidColor { input: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
