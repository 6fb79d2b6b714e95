//! Expected data, hand-checked against the published reqres dataset.

use reqres_client::model::{Color, LoginRequest, RegisterRequest, User, UserRequest};

/// Name of the content type header.
pub const CONTENT_TYPE: &str = "content-type";

/// Name of the content length header.
pub const CONTENT_LENGTH: &str = "content-length";

/// Content type of every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Validation message for a login or registration without password.
pub const MISSING_PASSWORD: &str = "Missing password";

/// Email of the account that can log in and register.
pub const VALID_EMAIL: &str = "eve.holt@reqres.in";

/// Password of [`VALID_EMAIL`].
pub const VALID_PASSWORD: &str = "pistol";

/// Token returned for [`VALID_EMAIL`].
pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// Id returned when registering [`VALID_EMAIL`].
pub const REGISTERED_ID: u32 = 4;

/// Email used for a login without password.
pub const LOGIN_WITHOUT_PASSWORD_EMAIL: &str = "peter@klaven";

/// Email used for a registration without password.
pub const REGISTER_WITHOUT_PASSWORD_EMAIL: &str = "sydney@fife";

/// An id no user nor color has.
pub const UNKNOWN_ID: u32 = 23;

/// Page size of every listing.
pub const PER_PAGE: u32 = 6;

/// Number of users, and of colors.
pub const TOTAL: u32 = 12;

/// Number of pages of every listing.
pub const TOTAL_PAGES: u32 = 2;

fn avatar(id: u32) -> String {
    format!("https://reqres.in/img/faces/{id}-image.jpg")
}

fn user(id: u32, first_name: &str, last_name: &str) -> User {
    User {
        id,
        email: format!(
            "{}.{}@reqres.in",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        avatar: avatar(id),
    }
}

fn color(id: u32, name: &str, year: u16, hex: &str, pantone_value: &str) -> Color {
    Color {
        id,
        name: name.to_string(),
        year,
        color: hex.to_string(),
        pantone_value: pantone_value.to_string(),
    }
}

/// Users 1 to 6, the first page of `GET /users`.
pub fn users_page_1() -> Vec<User> {
    vec![
        user(1, "George", "Bluth"),
        user(2, "Janet", "Weaver"),
        user(3, "Emma", "Wong"),
        user(4, "Eve", "Holt"),
        user(5, "Charles", "Morris"),
        user(6, "Tracey", "Ramos"),
    ]
}

/// Users 7 to 12, the second page of `GET /users`.
pub fn users_page_2() -> Vec<User> {
    vec![
        user(7, "Michael", "Lawson"),
        user(8, "Lindsay", "Ferguson"),
        user(9, "Tobias", "Funke"),
        user(10, "Byron", "Fields"),
        user(11, "George", "Edwards"),
        user(12, "Rachel", "Howell"),
    ]
}

/// User 2, as returned by `GET /users/2`.
pub fn user_2() -> User {
    user(2, "Janet", "Weaver")
}

/// Colors 1 to 6, the first page of `GET /colors`.
pub fn colors_page_1() -> Vec<Color> {
    vec![
        color(1, "cerulean", 2000, "#98B2D1", "15-4020"),
        color(2, "fuchsia rose", 2001, "#C74375", "17-2031"),
        color(3, "true red", 2002, "#BF1932", "19-1664"),
        color(4, "aqua sky", 2003, "#7BC4C4", "14-4811"),
        color(5, "tigerlily", 2004, "#E2583E", "17-1456"),
        color(6, "blue turquoise", 2005, "#53B0AE", "15-5217"),
    ]
}

/// Colors 7 to 12, the second page of `GET /colors`.
pub fn colors_page_2() -> Vec<Color> {
    vec![
        color(7, "sand dollar", 2006, "#DECDBE", "13-1106"),
        color(8, "chili pepper", 2007, "#9B1B30", "19-1557"),
        color(9, "blue iris", 2008, "#5A5B9F", "18-3943"),
        color(10, "mimosa", 2009, "#F0C05A", "14-0848"),
        color(11, "turquoise", 2010, "#45B5AA", "15-5519"),
        color(12, "honeysuckle", 2011, "#D94F70", "18-2120"),
    ]
}

/// Color 2, as returned by `GET /colors/2`.
pub fn color_2() -> Color {
    color(2, "fuchsia rose", 2001, "#C74375", "17-2031")
}

/// Body of `POST /users`.
pub fn create_user_request() -> UserRequest {
    UserRequest::new("morpheus", "leader")
}

/// Body of `PUT` and `PATCH /users/2`.
pub fn update_user_request() -> UserRequest {
    UserRequest::new("morpheus", "zion resident")
}

/// Valid credentials for `POST /login`.
pub fn valid_login() -> LoginRequest {
    LoginRequest::new(VALID_EMAIL, VALID_PASSWORD)
}

/// Credentials without password for `POST /login`.
pub fn login_without_password() -> LoginRequest {
    LoginRequest::without_password(LOGIN_WITHOUT_PASSWORD_EMAIL)
}

/// Valid credentials for `POST /register`.
pub fn valid_registration() -> RegisterRequest {
    RegisterRequest::new(VALID_EMAIL, VALID_PASSWORD)
}

/// Credentials without password for `POST /register`.
pub fn registration_without_password() -> RegisterRequest {
    RegisterRequest::without_password(REGISTER_WITHOUT_PASSWORD_EMAIL)
}
