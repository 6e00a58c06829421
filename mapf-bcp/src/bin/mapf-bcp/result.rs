use std::fmt::Display;

use mapf_bcp::conflicts::HandlerError;
use thiserror::Error;

use crate::parsers::InstanceParseError;

pub(crate) type MapfBcpResult<T> = Result<T, MapfBcpError>;

#[derive(Error, Debug)]
pub(crate) enum MapfBcpError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {path} is invalid, more details: {source}")]
    InvalidInstance {
        path: String,
        source: InstanceParseError,
    },
    #[error("The conflict handler failed, more details: {0}")]
    Handler(#[from] HandlerError),
}

impl MapfBcpError {
    pub(crate) fn invalid_instance(path: impl Display, source: InstanceParseError) -> Self {
        Self::InvalidInstance {
            path: format!("{path}"),
            source,
        }
    }
}
