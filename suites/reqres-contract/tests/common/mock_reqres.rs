//! A local stand-in for the reqres service.
//!
//! It replays the published dataset with the same status codes, content type
//! and envelopes as the hosted API, so the suites run offline.

use std::fmt;

use reqres_contract::fixtures::{
    JSON_CONTENT_TYPE, MISSING_PASSWORD, PER_PAGE, REGISTERED_ID, TOKEN, TOTAL, TOTAL_PAGES,
    VALID_EMAIL, colors_page_1, colors_page_2, users_page_1, users_page_2,
};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Id handed out by `POST /users`.
pub const CREATED_ID: &str = "742";

/// Timestamp of every created or updated user.
pub const TIMESTAMP: &str = "2025-03-14T09:26:53.589Z";

fn support() -> Value {
    json!({
        "url": "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral",
        "text": "Tired of writing endless social media content? Let Content Caddy generate it for you."
    })
}

fn json_response(status: u16, body: &Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), JSON_CONTENT_TYPE)
}

fn page(number: u32, data: Value) -> ResponseTemplate {
    json_response(
        200,
        &json!({
            "page": number,
            "per_page": PER_PAGE,
            "total": TOTAL,
            "total_pages": TOTAL_PAGES,
            "data": data,
            "support": support(),
        }),
    )
}

fn single(data: Value) -> ResponseTemplate {
    json_response(200, &json!({ "data": data, "support": support() }))
}

fn not_found() -> ResponseTemplate {
    json_response(404, &json!({}))
}

/// Echoes `name` and `job` back with a server field.
fn echo_user(
    status: u16,
    field: &'static str,
    extra: Value,
) -> impl Fn(&Request) -> ResponseTemplate {
    move |request: &Request| {
        let Ok(Value::Object(mut body)) = request.body_json::<Value>() else {
            return json_response(400, &json!({ "error": "invalid json" }));
        };
        if let Value::Object(fields) = &extra {
            body.extend(fields.clone());
        }
        body.insert(field.to_string(), Value::from(TIMESTAMP));
        json_response(status, &Value::Object(body))
    }
}

/// `POST /login` and `POST /register` validation.
fn credentials(
    success: Value,
    unknown_user: &'static str,
) -> impl Fn(&Request) -> ResponseTemplate {
    move |request: &Request| {
        let body = request.body_json::<Value>().unwrap_or(Value::Null);
        let email = body.get("email").and_then(Value::as_str);
        let password = body.get("password").and_then(Value::as_str);

        match (email, password) {
            (None, _) => json_response(400, &json!({ "error": "Missing email or username" })),
            (Some(_), None) => json_response(400, &json!({ "error": MISSING_PASSWORD })),
            (Some(VALID_EMAIL), Some(_)) => json_response(200, &success),
            (Some(_), Some(_)) => json_response(400, &json!({ "error": unknown_user })),
        }
    }
}

/// Mock server mounted with the reqres endpoints.
pub struct ReqResMockServer {
    server: MockServer,
}

impl ReqResMockServer {
    /// Starts a server with every endpoint mounted.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let mock = Self { server };
        mock.mount_users().await;
        mock.mount_colors().await;
        mock.mount_accounts().await;
        mock
    }

    /// Get the base URI for the mock server.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Requests received so far.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    async fn mount_users(&self) {
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .respond_with(page(2, json!(users_page_2())))
            .with_priority(1)
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(page(1, json!(users_page_1())))
            .mount(&self.server)
            .await;

        for user in users_page_1().into_iter().chain(users_page_2()) {
            Mock::given(method("GET"))
                .and(path(format!("/users/{}", user.id)))
                .respond_with(single(json!(user)))
                .with_priority(1)
                .mount(&self.server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path_regex(r"^/users/[^/]+$"))
            .respond_with(not_found())
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(echo_user(201, "createdAt", json!({ "id": CREATED_ID })))
            .mount(&self.server)
            .await;
        for verb in ["PUT", "PATCH"] {
            Mock::given(method(verb))
                .and(path_regex(r"^/users/[^/]+$"))
                .respond_with(echo_user(200, "updatedAt", json!({})))
                .mount(&self.server)
                .await;
        }
        Mock::given(method("DELETE"))
            .and(path_regex(r"^/users/[^/]+$"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    async fn mount_colors(&self) {
        Mock::given(method("GET"))
            .and(path("/colors"))
            .and(query_param("page", "2"))
            .respond_with(page(2, json!(colors_page_2())))
            .with_priority(1)
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/colors"))
            .respond_with(page(1, json!(colors_page_1())))
            .mount(&self.server)
            .await;

        for color in colors_page_1().into_iter().chain(colors_page_2()) {
            Mock::given(method("GET"))
                .and(path(format!("/colors/{}", color.id)))
                .respond_with(single(json!(color)))
                .with_priority(1)
                .mount(&self.server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path_regex(r"^/colors/[^/]+$"))
            .respond_with(not_found())
            .mount(&self.server)
            .await;
    }

    async fn mount_accounts(&self) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(credentials(json!({ "token": TOKEN }), "user not found"))
            .mount(&self.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(credentials(
                json!({ "id": REGISTERED_ID, "token": TOKEN }),
                "Note: Only defined users succeed registration",
            ))
            .mount(&self.server)
            .await;
    }
}

impl fmt::Debug for ReqResMockServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqResMockServer")
            .field("uri", &self.server.uri())
            .finish()
    }
}
