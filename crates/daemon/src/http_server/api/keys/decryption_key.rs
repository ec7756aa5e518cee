use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::release::{parse_epoch, parse_ephemeral_key};

use super::error::KeyApiError;
use crate::http_server::api::client::{endpoint, ApiRequest};
use crate::ServiceState;

pub const PATH: &str = "/decryption-key";

/// Client side of the request
#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct DecryptionKeyRequest {
    /// Epoch whose private key is wanted
    #[arg(long)]
    pub epoch: u64,

    /// Caller's ephemeral X25519 public key (hex)
    #[arg(long)]
    pub ephemeral_public_key: String,
}

/// Raw query parameters, validated by the handler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecryptionKeyQuery {
    pub epoch: Option<String>,
    pub ephemeral_public_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptionKeyResponse {
    /// Hex encoded epoch private key
    pub epoch_private_key: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Query(query): Query<DecryptionKeyQuery>,
) -> Result<impl IntoResponse, KeyApiError> {
    // both parameters are validated before the gate is consulted
    let epoch = parse_epoch(query.epoch.as_deref())?;
    let ephemeral = parse_ephemeral_key(query.ephemeral_public_key.as_deref())?;

    let key = state.release().decryption_key(epoch, &ephemeral)?;
    Ok(Json(DecryptionKeyResponse {
        epoch_private_key: key.to_hex(),
    }))
}

impl ApiRequest for DecryptionKeyRequest {
    type Response = DecryptionKeyResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, PATH)).query(&self)
    }
}
