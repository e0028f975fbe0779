use uuid::Uuid;

use crate::domain::entities::Session;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStore;
use crate::interface_adapters::protocol::LoginRequest;

// Response returned by the login use case.
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

// Login use case with injected dependencies.
pub struct LoginUseCase<S> {
    pub store: S,
}

impl<S> LoginUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self, payload: LoginRequest) -> Result<LoginResponse, AuthError> {
        let username = payload
            .username
            .filter(|name| !name.is_empty())
            .ok_or(AuthError::InvalidUsername)?;

        // Sessions never expire; they live until logout or restart.
        let token = Uuid::new_v4().to_string();
        let user_id = Uuid::new_v4().to_string();

        let session = Session {
            user_id: user_id.clone(),
            username: username.clone(),
        };

        self.store
            .insert(token.clone(), session)
            .await
            .map_err(AuthError::StorageFailure)?;

        tracing::debug!(%username, %user_id, "issued session token");

        Ok(LoginResponse {
            token,
            user_id,
            username,
        })
    }
}
