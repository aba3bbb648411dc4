//! Authentication and profile API client methods

use super::{ClientError, NostosClient, RequestOptions};
use crate::types::{
    AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, ListResponse, LoginRequest,
    LogoutRequest, MessageResponse, Page, ProfileUpdate, RegisterRequest, ResetPasswordRequest,
    Role, User,
};
use tracing::{debug, info};

impl NostosClient {
    /// Register a new account and start a session with the returned tokens
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self.post("/users/register/", request).await?;
        self.store_login(&response);
        Ok(response)
    }

    /// Log in with the given role and start a session with the returned tokens
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthResponse, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let response: AuthResponse = self.post("/users/login/", &request).await?;
        self.store_login(&response);
        Ok(response)
    }

    fn store_login(&self, response: &AuthResponse) {
        let Some((access, refresh)) = response.token_pair() else {
            debug!("Auth response carried no token pair; session unchanged");
            return;
        };

        self.session.set_tokens(access, refresh);
        if let Some(user) = &response.user {
            self.session.set_user(user);
            info!(user_id = user.id, role = %user.role, "Logged in");
        }
    }

    /// End the session.
    ///
    /// The server is told about it when a refresh token is held, but a failed
    /// notification is only logged. Local state is always cleared, and the
    /// session-expired hook never runs from here.
    pub async fn logout(&self) {
        if let Some(refresh) = self.session.refresh_token() {
            let request = LogoutRequest {
                refresh_token: &refresh,
            };
            let notification = match RequestOptions::post().json(&request) {
                Ok(options) => {
                    self.request_quietly::<MessageResponse>("/users/logout/", options)
                        .await
                }
                Err(err) => Err(err),
            };
            if let Err(err) = notification {
                debug!(error = %err, "Ignoring failed logout notification");
            }
        }

        self.session.clear();
        info!("Logged out");
    }

    /// Fetch the current user's profile
    pub async fn profile(&self) -> Result<User, ClientError> {
        self.get("/users/profile/").await
    }

    /// Update the current user's profile and refresh the cached copy
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        let user: User = self.put("/users/profile/", update).await?;
        self.session.set_user(&user);
        Ok(user)
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ClientError> {
        let request = ChangePasswordRequest {
            current_password,
            new_password,
            new_password2: new_password,
        };
        self.post("/users/change-password/", &request).await
    }

    /// Ask for a password reset link
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ClientError> {
        self.post("/users/forgot-password/", &ForgotPasswordRequest { email })
            .await
    }

    /// Set a new password using a reset token
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ClientError> {
        let request = ResetPasswordRequest {
            token,
            new_password,
            new_password2: new_password,
        };
        self.post("/users/reset-password/", &request).await
    }

    /// List accounts. Admins see everyone, other roles only themselves.
    pub async fn list_users(&self) -> Result<Page<User>, ClientError> {
        let response: ListResponse<User> = self.get("/users/list/").await?;
        Ok(response.into_page())
    }
}
