use axum::routing::get;
use axum::Router;

pub mod client;
pub mod keys;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route(keys::eon_key::PATH, get(keys::eon_key::handler))
        .route(
            keys::epoch_public_key::PATH,
            get(keys::epoch_public_key::handler),
        )
        .route(
            keys::decryption_key::PATH,
            get(keys::decryption_key::handler),
        )
        .with_state(state)
}
