//! Response handling and status validation.
//!
//! This module provides:
//!
//! - [`ExpectedStatusCodes`] - the transport-level status policy
//! - [`CallResult`] - a response with its body read, decodable in several ways
//! - [`ApiResponse`] and [`Reply`] - the typed result of each endpoint

mod status;
pub use self::status::{ExpectedStatusCodes, RELAXED_MAX_STATUS, RELAXED_MIN_STATUS};

mod output;
pub use self::output::Output;

mod result;
pub use self::result::{CallResult, RawBody, RawResult};

mod reply;
pub use self::reply::{ApiResponse, Reply};
