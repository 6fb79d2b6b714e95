#![allow(missing_docs)]

use reqres_client::CallQuery;
use reqres_client::model::{EmptyObject, PageQuery, Single, User};
use reqres_contract::assertions::{assert_consistent_page, assert_status, assert_success};
use reqres_contract::fixtures::{TOTAL, user_2};
use rstest::rstest;
use tracing::info;

mod common;
pub use self::common::*;

#[rstest]
#[tokio::test]
async fn should_keep_user_pages_consistent(#[future] harness: Harness) -> anyhow::Result<()> {
    let harness = harness.await;

    let first = harness.list_users(PageQuery::page(1)).await?;
    let total_pages = assert_success(&first).total_pages;

    let mut ids = Vec::new();
    for number in 1..=total_pages {
        let response = harness.list_users(PageQuery::page(number)).await?;
        assert_status(&response, 200);
        let page = assert_success(&response);
        info!(number, items = page.data.len(), "users page");
        assert_eq!(page.page, number);
        assert_consistent_page(page);
        ids.extend(page.data.iter().map(|user| user.id));
    }

    assert_eq!(ids, (1..=TOTAL).collect::<Vec<_>>());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_keep_color_pages_consistent(#[future] harness: Harness) -> anyhow::Result<()> {
    let harness = harness.await;

    let first = harness.list_colors(PageQuery::default()).await?;
    let total_pages = assert_success(&first).total_pages;

    let mut count = 0;
    for number in 1..=total_pages {
        let response = harness.list_colors(PageQuery::page(number)).await?;
        let page = assert_success(&response);
        assert_consistent_page(page);
        count += page.data.len();
    }

    assert_eq!(count, TOTAL as usize);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_answer_repeated_reads_identically(
    #[future] harness: Harness,
) -> anyhow::Result<()> {
    let harness = harness.await;

    let first = harness.get("/users/2")?.await?;
    let second = harness.get("/users/2")?.await?;

    assert_eq!(first.status(), second.status());
    assert_eq!(first.as_text()?, second.as_text()?);
    assert_eq!(assert_success(&second.into_reply::<Single<User>, EmptyObject>()?).data, user_2());

    let query = CallQuery::from_serialize(&PageQuery::page(2))?;
    let first = harness.get("/users")?.with_query(query.clone()).await?;
    let second = harness.get("/users")?.with_query(query).await?;

    assert_eq!(first.as_text()?, second.as_text()?);
    Ok(())
}
