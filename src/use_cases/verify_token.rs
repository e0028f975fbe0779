use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStore;

const BEARER_PREFIX: &str = "Bearer ";

// Response returned by the token verification use case.
#[derive(Clone, Debug)]
pub struct VerifyTokenResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

// Token verification use case with injected dependencies.
pub struct VerifyTokenUseCase<S> {
    pub store: S,
}

impl<S> VerifyTokenUseCase<S>
where
    S: SessionStore,
{
    // Resolves a raw Authorization header value into the session it names.
    pub async fn execute(
        &self,
        authorization: Option<&str>,
    ) -> Result<VerifyTokenResponse, AuthError> {
        let token = bearer_token(authorization)?;

        let session = self
            .store
            .get(token)
            .await
            .map_err(AuthError::StorageFailure)?
            .ok_or(AuthError::InvalidToken)?;

        Ok(VerifyTokenResponse {
            token: token.to_string(),
            user_id: session.user_id,
            username: session.username,
        })
    }
}

// Extracts the token from `Bearer <token>`; anything after a second space is ignored.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let rest = authorization
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(AuthError::MissingToken)?;

    Ok(rest.split(' ').next().unwrap_or_default())
}
