//! Request and response shapes of the reqres API.
//!
//! Response types ignore unknown fields, so the `support` block the service
//! appends to its envelopes does not need a counterpart here.

mod auth;
pub use self::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

mod error;
pub use self::error::{EmptyObject, ErrorResponse};

mod user;
pub use self::user::{CreatedUser, UpdatedUser, User, UserRequest};

mod color;
pub use self::color::Color;

mod envelope;
pub use self::envelope::{Page, PageQuery, Single};
