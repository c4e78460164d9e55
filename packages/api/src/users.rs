//! `/users` resource.

use std::future::Future;

use store::{Role, User};

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{NewUser, UserUpdate};

pub trait UsersApi {
    /// `POST /users/signup`
    fn create_user(&self, user: &NewUser) -> impl Future<Output = Result<User, ApiError>>;
    /// `GET /users/{id}`
    fn get_user(&self, id: i64) -> impl Future<Output = Result<User, ApiError>>;
    /// `PUT /users/{id}`
    fn update_user(
        &self,
        id: i64,
        update: &UserUpdate,
    ) -> impl Future<Output = Result<User, ApiError>>;
    /// `POST /users/login?email=&name=`; either identifier may be omitted.
    fn login(
        &self,
        email: Option<&str>,
        name: Option<&str>,
    ) -> impl Future<Output = Result<User, ApiError>>;
    /// `GET /users/?role=`
    fn list_users(&self, role: Option<Role>) -> impl Future<Output = Result<Vec<User>, ApiError>>;
}

impl UsersApi for ApiClient {
    async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.post("/users/signup", Some(user), &Query::new()).await
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get(&format!("/users/{id}"), &Query::new()).await
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.put(&format!("/users/{id}"), update).await
    }

    async fn login(&self, email: Option<&str>, name: Option<&str>) -> Result<User, ApiError> {
        let query = Query::new().with_opt("email", email).with_opt("name", name);
        self.post("/users/login", None::<&()>, &query).await
    }

    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, ApiError> {
        self.get("/users/", &Query::new().with_opt("role", role)).await
    }
}
