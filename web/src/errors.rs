use thiserror::Error as ThisError;

use access::ApiError;
use replies::{BaseResponse, ErrorCode, Payload};

/// Anything that keeps a page from showing what it asked for.
#[derive(ThisError, Clone, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{}", rejected_message(.code, .message))]
    Rejected {
        code: ErrorCode,
        message: Option<String>,
    },
    #[error("Nothing found")]
    Empty,
}

fn rejected_message(code: &ErrorCode, message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.clone(),
        _ => format!("Request failed ({})", code),
    }
}

pub fn into_data<T>(response: BaseResponse<T>) -> Result<T, Error> {
    match response.into_payload() {
        Payload::Data(data) => Ok(data),
        Payload::Empty => Err(Error::Empty),
        Payload::Failed { code, message } => Err(Error::Rejected { code, message }),
    }
}
