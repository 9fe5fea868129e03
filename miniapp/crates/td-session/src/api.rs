use async_trait::async_trait;
use td_client::{ApiClient, ClientResult, ProbeOutcome};
use td_core::IdentityPayload;

/// The three calls the session ladder is built from
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Ask the server who the caller is
    async fn whoami(&self) -> ClientResult<ProbeOutcome>;

    /// Renew the session cookie
    async fn refresh(&self) -> ClientResult<()>;

    /// Trade the host identity payload for a session
    async fn exchange(&self, payload: &IdentityPayload) -> ClientResult<()>;
}

#[async_trait]
impl SessionApi for ApiClient {
    async fn whoami(&self) -> ClientResult<ProbeOutcome> {
        ApiClient::whoami(self).await
    }

    async fn refresh(&self) -> ClientResult<()> {
        self.refresh_session().await
    }

    async fn exchange(&self, payload: &IdentityPayload) -> ClientResult<()> {
        self.exchange_identity(payload).await
    }
}
