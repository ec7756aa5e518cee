use clap::Args;
use reqwest::StatusCode;

use common::crypto::{KeyError, SecretKey};
use epochlock_daemon::http_server::api::client::ApiError;
use epochlock_daemon::http_server::api::keys::{
    DecryptionKeyRequest, EpochPublicKeyRequest, ErrorBody,
};

#[derive(Args, Debug, Clone)]
pub struct DecryptionKey {
    /// Epoch whose private key is wanted
    #[arg(long)]
    pub epoch: u64,

    /// Ephemeral public key to send (hex). A throwaway key is generated if omitted.
    #[arg(long)]
    pub ephemeral_public_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DecryptionKeyError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("key error: {0}")]
    Key(#[from] KeyError),
    #[error("released key for epoch {0} does not match its published public key")]
    Mismatch(u64),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for DecryptionKey {
    type Error = DecryptionKeyError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let ephemeral_public_key = match &self.ephemeral_public_key {
            Some(hex) => hex.clone(),
            None => SecretKey::generate()?.public().to_hex(),
        };

        let request = DecryptionKeyRequest {
            epoch: self.epoch,
            ephemeral_public_key,
        };

        let response = match ctx.client.call(request).await {
            Ok(response) => response,
            Err(e) => {
                if let Some((StatusCode::NOT_FOUND, body)) = e.http_status() {
                    return Ok(locked_message(self.epoch, body));
                }
                return Err(e.into());
            }
        };

        // the released key must open what was sealed to the published key
        let secret = SecretKey::from_hex(&response.epoch_private_key)?;
        let published = ctx
            .client
            .call(EpochPublicKeyRequest { epoch: self.epoch })
            .await?;
        if secret.public() != published.epoch_public_key {
            return Err(DecryptionKeyError::Mismatch(self.epoch));
        }

        Ok(format!(
            "epoch {}: {}",
            self.epoch, response.epoch_private_key
        ))
    }
}

fn locked_message(epoch: u64, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            seconds_until_available: Some(seconds),
            ..
        }) => format!(
            "epoch {} is still locked; available in {}s",
            epoch, seconds
        ),
        _ => format!("epoch {} is still locked", epoch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_message() {
        let body = r#"{"error":"Decryption key not available yet.","seconds_until_available":12}"#;
        assert_eq!(
            locked_message(9, body),
            "epoch 9 is still locked; available in 12s"
        );
        assert_eq!(locked_message(9, "not json"), "epoch 9 is still locked");
    }
}
