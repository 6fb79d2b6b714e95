//! # ReqRes Contract
//!
//! Contract tests for the [reqres](https://reqres.in) REST API.
//!
//! This crate holds what the suites under `tests/` share:
//!
//! - [`fixtures`]: the expected users, colors, credentials and constants
//! - [`formats`]: shape checks for server-generated ids and timestamps
//! - [`assertions`]: response assertions that name the differing field
//!
//! The suites run against a local mock replaying the published dataset by
//! default. Set `REQRES_LIVE` to run them against `https://reqres.in/api`;
//! `REQRES_API_KEY`, when set, is sent as the `x-api-key` header.

pub mod assertions;
pub mod fixtures;
pub mod formats;
