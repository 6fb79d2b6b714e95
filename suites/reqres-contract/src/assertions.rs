//! Response assertions.
//!
//! Every helper panics with a message naming what differs, so a failing
//! contract points at the offending field.

use std::fmt::Debug;

use reqres_client::model::Page;
use reqres_client::{ApiResponse, Reply};

use crate::fixtures::{CONTENT_LENGTH, CONTENT_TYPE, JSON_CONTENT_TYPE};

/// Asserts that the response has the expected status code.
#[track_caller]
pub fn assert_status<B>(response: &ApiResponse<B>, expected: u16) {
    let actual = response.status().as_u16();
    assert_eq!(actual, expected, "Expected status {expected}, got {actual}");
}

/// Asserts that the response is `application/json; charset=utf-8`.
#[track_caller]
pub fn assert_json_content_type<B>(response: &ApiResponse<B>) {
    let actual = response.header(CONTENT_TYPE);
    assert_eq!(
        actual,
        Some(JSON_CONTENT_TYPE),
        "Expected {CONTENT_TYPE} {JSON_CONTENT_TYPE}, got {actual:?}"
    );
}

/// Asserts that the response has no body and a length of zero.
#[track_caller]
pub fn assert_empty_body<B>(response: &ApiResponse<B>) {
    let length = response.content_length();
    assert_eq!(length, Some(0), "Expected {CONTENT_LENGTH} 0, got {length:?}");
}

/// Returns the success body, or panics with the failure body.
#[track_caller]
pub fn assert_success<T, E>(response: &ApiResponse<Reply<T, E>>) -> &T
where
    E: Debug,
{
    match response.body() {
        Reply::Success(body) => body,
        Reply::Failure(error) => panic!(
            "Expected a success body, got status {} with {error:?}",
            response.status()
        ),
        Reply::Unexpected(output) => panic!(
            "Expected a success body, got status {} with {output:?}",
            response.status()
        ),
    }
}

/// Returns the failure body, or panics with the success body.
#[track_caller]
pub fn assert_failure<T, E>(response: &ApiResponse<Reply<T, E>>) -> &E
where
    T: Debug,
{
    match response.body() {
        Reply::Failure(error) => error,
        Reply::Success(body) => panic!(
            "Expected a failure body, got status {} with {body:?}",
            response.status()
        ),
        Reply::Unexpected(output) => panic!(
            "Expected the declared failure body, got status {} with {output:?}",
            response.status()
        ),
    }
}

/// Asserts the pagination fields of a page and their consistency.
#[track_caller]
pub fn assert_page<T>(page: &Page<T>, number: u32, per_page: u32, total: u32, total_pages: u32) {
    assert_eq!(page.page, number, "Expected page {number}, got {}", page.page);
    assert_eq!(
        page.per_page, per_page,
        "Expected per_page {per_page}, got {}",
        page.per_page
    );
    assert_eq!(page.total, total, "Expected total {total}, got {}", page.total);
    assert_eq!(
        page.total_pages, total_pages,
        "Expected total_pages {total_pages}, got {}",
        page.total_pages
    );
    assert_consistent_page(page);
}

/// Asserts `total_pages == ceil(total / per_page)` and `data.len() <= per_page`.
#[track_caller]
pub fn assert_consistent_page<T>(page: &Page<T>) {
    assert!(
        page.is_consistent(),
        "Inconsistent page: page {}, per_page {}, total {}, total_pages {}, {} items",
        page.page,
        page.per_page,
        page.total,
        page.total_pages,
        page.data.len()
    );
}
