use opensubsonic_client::{Params, SubsonicResponse};
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::users::{User, UserArgs};

impl super::SubsonicApi {
    /// Get one user's settings and roles.
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<User> {
        self.fetch("getUser", "user", Params::new().with("username", username))
            .await
    }

    /// List all users. Admins only.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.fetch_list("getUsers", "users", "user", Params::new())
            .await
    }

    /// Create a user. Admins only.
    #[instrument(skip(self))]
    pub async fn create_user(&self, args: UserArgs) -> Result<SubsonicResponse> {
        if args.password.is_none() {
            return Err(Error::new(ErrorKind::InvalidArgument(
                "a new user needs a password".to_string(),
            )));
        }
        self.call("createUser", args.into_params()).await
    }

    /// Change an existing user. Unset fields keep their value.
    #[instrument(skip(self))]
    pub async fn update_user(&self, args: UserArgs) -> Result<SubsonicResponse> {
        self.call("updateUser", args.into_params()).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, username: &str) -> Result<SubsonicResponse> {
        self.call("deleteUser", Params::new().with("username", username))
            .await
    }

    /// Change a user's password.
    #[instrument(skip(self, password))]
    pub async fn change_password(&self, username: &str, password: &str) -> Result<SubsonicResponse> {
        let params = Params::new()
            .with("username", username)
            .with("password", password);
        self.call("changePassword", params).await
    }
}
