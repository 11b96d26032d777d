//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenMetadata, ApiTokenVersion, AuthServiceError, IssuedApiToken, NewApiToken,
        format_api_token, generate_api_token_secret, hash_api_token, parse_api_token,
        repository::PgAuthRepository, verifiers_match,
    },
    domain::identities::UserId,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user id is blank or database insertion fails.
    pub async fn issue_api_token(&self, user: UserId) -> Result<IssuedApiToken, AuthServiceError> {
        if !user.is_valid() {
            return Err(AuthServiceError::InvalidInput);
        }

        let token_id = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_id, version, &secret);
        let token_hash = hash_api_token(&token_id, version, &user, &secret);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                id: token_id,
                user_id: user,
                version,
                token_hash,
            })
            .await?;

        info!(token_id = %metadata.id, user_id = %metadata.user_id, "issued api token");

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        user: &UserId,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        self.repository
            .list_api_tokens_by_user(user)
            .await
            .map_err(AuthServiceError::from)
    }

    /// Revoke a token by id. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_id: Uuid) -> Result<bool, AuthServiceError> {
        let revoked = self.repository.revoke_api_token(token_id).await?.is_some();

        if revoked {
            info!(%token_id, "revoked api token");
        }

        Ok(revoked)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError> {
        let parsed_token = parse_api_token(bearer_token).map_err(|_ignored| AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_api_token_by_id(parsed_token.token_id, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let expected = hash_api_token(
            &parsed_token.token_id,
            parsed_token.version,
            &token.user_id,
            &parsed_token.secret,
        );

        if token.version != parsed_token.version || !verifiers_match(&expected, &token.token_hash)
        {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success should not depend on this write.
        if let Err(error) = self
            .repository
            .touch_api_token_last_used(parsed_token.token_id)
            .await
        {
            debug!(%error, "failed to record api token use");
        }

        Ok(token.user_id)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the user it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError>;
}
