use actix_web::web;
use log::debug;

use crate::utils::error::CustomError;

/// Body extractor settings that turn unreadable JSON into a validation error.
///
/// A malformed or mistyped body is reported with the same message as a body
/// with missing fields, so clients only ever see one shape of 400.
pub fn json_config(message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, _req| {
        debug!("Rejected request body: {err}");
        CustomError::ValidationError(message.to_string()).into()
    })
}

/// Path extractor settings that treat an unparsable id like an unknown one.
pub fn path_config(message: &'static str) -> web::PathConfig {
    web::PathConfig::default().error_handler(move |err, _req| {
        debug!("Rejected path segment: {err}");
        CustomError::NotFoundError(message.to_string()).into()
    })
}
