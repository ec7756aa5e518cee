use axum::extract::{Json, State};
use axum::response::IntoResponse;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::crypto::PublicKey;
use common::release::EonInfo;

use crate::http_server::api::client::{endpoint, ApiRequest};
use crate::ServiceState;

pub const PATH: &str = "/eon-key";

#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Args)]
pub struct EonKeyRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EonKeyResponse {
    pub eon_public_key: PublicKey,
    pub epoch_duration: u64,
    pub current_epoch: u64,
}

impl From<EonInfo> for EonKeyResponse {
    fn from(info: EonInfo) -> Self {
        Self {
            eon_public_key: info.eon_public_key,
            epoch_duration: info.epoch_duration,
            current_epoch: info.current_epoch,
        }
    }
}

pub async fn handler(State(state): State<ServiceState>) -> impl IntoResponse {
    Json(EonKeyResponse::from(state.release().eon_info()))
}

impl ApiRequest for EonKeyRequest {
    type Response = EonKeyResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, PATH))
    }
}
