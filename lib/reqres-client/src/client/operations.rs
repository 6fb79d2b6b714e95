use tracing::instrument;

use super::response::{ApiResponse, Reply};
use super::{ApiClientError, CallPath, ReqResClient};
use crate::model::{
    Color, CreatedUser, EmptyObject, ErrorResponse, LoginRequest, LoginResponse, Page, PageQuery,
    RegisterRequest, RegisterResponse, Single, UpdatedUser, User, UserRequest,
};

/// Result of a typed operation: `T` on success, `E` for a 4xx/5xx body.
pub type ApiResult<T, E> = Result<ApiResponse<Reply<T, E>>, ApiClientError>;

fn user_path(id: u32) -> CallPath {
    CallPath::from("/users/{id}").add_param("id", id)
}

/// Users.
impl ReqResClient {
    /// `GET /users`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and bodies that are
    /// neither a page of users nor `{}`.
    #[instrument(skip(self))]
    pub async fn list_users(&self, query: PageQuery) -> ApiResult<Page<User>, EmptyObject> {
        self.get("/users")?
            .with_query_params(&query)?
            .await?
            .into_reply()
    }

    /// `GET /users/{id}`; an unknown id answers `404 {}`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: u32) -> ApiResult<Single<User>, EmptyObject> {
        self.get(user_path(id))?.await?.into_reply()
    }

    /// `POST /users`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip(self))]
    pub async fn create_user(&self, user: &UserRequest) -> ApiResult<CreatedUser, ErrorResponse> {
        self.post("/users")?.json(user)?.await?.into_reply()
    }

    /// `PUT /users/{id}`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip(self))]
    pub async fn update_user(
        &self,
        id: u32,
        user: &UserRequest,
    ) -> ApiResult<UpdatedUser, ErrorResponse> {
        self.put(user_path(id))?.json(user)?.await?.into_reply()
    }

    /// `PATCH /users/{id}`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip(self))]
    pub async fn patch_user(
        &self,
        id: u32,
        user: &UserRequest,
    ) -> ApiResult<UpdatedUser, ErrorResponse> {
        self.patch(user_path(id))?.json(user)?.await?.into_reply()
    }

    /// `DELETE /users/{id}`; answers `204` with no body.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and a non-empty
    /// success body.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u32) -> ApiResult<(), ErrorResponse> {
        self.delete(user_path(id))?.await?.into_reply()
    }
}

/// Colors.
impl ReqResClient {
    /// `GET /colors`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip(self))]
    pub async fn list_colors(&self, query: PageQuery) -> ApiResult<Page<Color>, EmptyObject> {
        self.get("/colors")?
            .with_query_params(&query)?
            .await?
            .into_reply()
    }

    /// `GET /colors/{id}`; an unknown id answers `404 {}`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip(self))]
    pub async fn get_color(&self, id: u32) -> ApiResult<Single<Color>, EmptyObject> {
        let path = CallPath::from("/colors/{id}").add_param("id", id);
        self.get(path)?.await?.into_reply()
    }
}

/// Accounts.
impl ReqResClient {
    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn post_register(
        &self,
        request: &RegisterRequest,
    ) -> ApiResult<RegisterResponse, ErrorResponse> {
        self.post("/register")?.json(request)?.await?.into_reply()
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Transport failures, statuses outside the policy, and success bodies of another shape.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn post_login(
        &self,
        request: &LoginRequest,
    ) -> ApiResult<LoginResponse, ErrorResponse> {
        self.post("/login")?.json(request)?.await?.into_reply()
    }
}
