use clap::Args;

use epochlock_daemon::http_server::api::client::ApiError;
use epochlock_daemon::http_server::api::keys::{EonKeyRequest, EonKeyResponse};

#[derive(Args, Debug, Clone)]
pub struct EonKey;

#[derive(Debug, thiserror::Error)]
pub enum EonKeyError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for EonKey {
    type Error = EonKeyError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response: EonKeyResponse = ctx.client.call(EonKeyRequest).await?;
        Ok(format!(
            "eon public key: {}\nepoch duration: {}s\ncurrent epoch:  {}",
            response.eon_public_key, response.epoch_duration, response.current_epoch
        ))
    }
}
