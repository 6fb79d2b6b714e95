#![allow(missing_docs)]

use reqres_client::model::{ErrorResponse, LoginResponse};
use reqres_contract::assertions::{
    assert_failure, assert_json_content_type, assert_status, assert_success,
};
use reqres_contract::fixtures::{MISSING_PASSWORD, TOKEN, login_without_password, valid_login};
use rstest::rstest;

mod common;
pub use self::common::*;

#[rstest]
#[tokio::test]
async fn should_login_with_valid_credentials(#[future] harness: Harness) -> anyhow::Result<()> {
    let harness = harness.await;
    let expected = LoginResponse {
        token: TOKEN.to_string(),
    };

    let response = harness.post_login(&valid_login()).await?;

    assert_status(&response, 200);
    assert_json_content_type(&response);
    assert_eq!(assert_success(&response), &expected);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_reject_login_without_password(#[future] harness: Harness) -> anyhow::Result<()> {
    let harness = harness.await;
    let expected = ErrorResponse {
        error: MISSING_PASSWORD.to_string(),
    };

    let response = harness.post_login(&login_without_password()).await?;

    assert_status(&response, 400);
    assert_json_content_type(&response);
    assert_eq!(assert_failure(&response), &expected);
    Ok(())
}
