use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Code normalizes to an empty key (only symbols or `pdf`).
    #[error("code '{raw}' has no usable characters after normalization")]
    EmptyCode { raw: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
