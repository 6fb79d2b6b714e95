#![allow(clippy::missing_errors_doc, dead_code, missing_docs)]
use std::env;
use std::ops::Deref;

use anyhow::Context;
use reqres_client::{Authentication, ReqResClient};
use rstest::fixture;
use tracing::info;

mod mock_reqres;
pub use self::mock_reqres::*;

/// Runs the suites against `https://reqres.in/api` when set.
pub const LIVE_ENV: &str = "REQRES_LIVE";

/// Project key sent as `x-api-key` to the live service.
pub const API_KEY_ENV: &str = "REQRES_API_KEY";

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

/// A client wired to the target of this run.
///
/// In mocked mode the harness owns its mock server, which stops when the
/// harness is dropped.
#[derive(Debug)]
pub struct Harness {
    client: ReqResClient,
    mock: Option<ReqResMockServer>,
}

impl Harness {
    pub async fn start() -> anyhow::Result<Self> {
        if env::var_os(LIVE_ENV).is_some() {
            return Self::live();
        }
        Self::mocked().await
    }

    fn live() -> anyhow::Result<Self> {
        let mut builder = ReqResClient::builder();
        if let Ok(key) = env::var(API_KEY_ENV) {
            builder = builder.with_authentication(Authentication::api_key(key));
        }
        let client = builder.build().context("build live client")?;
        info!(base_uri = %client.base_uri(), "running against the live service");

        Ok(Self { client, mock: None })
    }

    async fn mocked() -> anyhow::Result<Self> {
        let mock = ReqResMockServer::start().await;
        let client = ReqResClient::builder()
            .with_base_url(&mock.uri())
            .context("mock server uri")?
            .build()
            .context("build mocked client")?;
        info!(base_uri = %client.base_uri(), "running against the mock server");

        Ok(Self {
            client,
            mock: Some(mock),
        })
    }

    pub fn is_live(&self) -> bool {
        self.mock.is_none()
    }
}

impl Deref for Harness {
    type Target = ReqResClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

#[fixture]
pub async fn harness() -> Harness {
    init_tracing();
    match Harness::start().await {
        Ok(harness) => harness,
        Err(error) => {
            panic!("fail to start test harness: {error:?}");
        }
    }
}
