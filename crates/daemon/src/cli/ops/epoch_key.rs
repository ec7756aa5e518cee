use clap::Args;

use epochlock_daemon::http_server::api::client::ApiError;
use epochlock_daemon::http_server::api::keys::EpochPublicKeyRequest;

#[derive(Args, Debug, Clone)]
pub struct EpochKey {
    #[command(flatten)]
    pub request: EpochPublicKeyRequest,
}

#[derive(Debug, thiserror::Error)]
pub enum EpochKeyError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for EpochKey {
    type Error = EpochKeyError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx.client.call(self.request.clone()).await?;
        Ok(format!(
            "epoch {}: {}",
            response.epoch, response.epoch_public_key
        ))
    }
}
