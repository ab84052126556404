use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Counter record not found: {0}")]
    RecordNotFound(String),

    #[error("Counter record is missing attribute: {0}")]
    MissingField(String),

    #[error("Counter record has an invalid count: {0}")]
    InvalidCount(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

// Generic implementation for AWS SDK errors
impl<E> From<aws_sdk_dynamodb::error::SdkError<E>> for CounterError
where
    E: std::fmt::Display,
{
    fn from(error: aws_sdk_dynamodb::error::SdkError<E>) -> Self {
        CounterError::AwsError(error.to_string())
    }
}
