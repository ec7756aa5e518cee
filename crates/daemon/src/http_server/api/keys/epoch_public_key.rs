use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::crypto::PublicKey;
use common::release::{parse_epoch, EpochPublicKey};

use super::error::KeyApiError;
use crate::http_server::api::client::{endpoint, ApiRequest};
use crate::ServiceState;

pub const PATH: &str = "/epoch-public-key";

/// Client side of the request
#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct EpochPublicKeyRequest {
    /// Epoch index to fetch the public key for
    #[arg(long)]
    pub epoch: u64,
}

/// Raw query parameters, validated by the handler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpochPublicKeyQuery {
    pub epoch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochPublicKeyResponse {
    pub epoch_public_key: PublicKey,
    pub epoch: u64,
}

impl From<EpochPublicKey> for EpochPublicKeyResponse {
    fn from(key: EpochPublicKey) -> Self {
        Self {
            epoch_public_key: key.epoch_public_key,
            epoch: key.epoch,
        }
    }
}

pub async fn handler(
    State(state): State<ServiceState>,
    Query(query): Query<EpochPublicKeyQuery>,
) -> Result<impl IntoResponse, KeyApiError> {
    let epoch = parse_epoch(query.epoch.as_deref())?;
    let key = state.release().epoch_public_key(epoch)?;
    tracing::debug!(epoch, epoch_public_key = %key.epoch_public_key, "served epoch public key");
    Ok(Json(EpochPublicKeyResponse::from(key)))
}

impl ApiRequest for EpochPublicKeyRequest {
    type Response = EpochPublicKeyResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, PATH)).query(&self)
    }
}
