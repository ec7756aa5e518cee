use std::convert::Infallible;

use clap::Args;

use epochlock_daemon::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Health;

#[async_trait::async_trait]
impl crate::cli::op::Op for Health {
    type Error = Infallible;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut lines = Vec::new();

        lines.push("Config:".to_string());
        match AppState::load(ctx.config_path.clone()) {
            Ok(state) => {
                let file = if state.config_path.exists() {
                    "OK"
                } else {
                    "not found, using defaults"
                };
                lines.push(format!("  directory:      {}", state.epochlock_dir.display()));
                lines.push(format!("  config.toml:    {}", file));
                lines.push(format!("  api_port:       {}", state.config.api_port));
                lines.push(format!("  epoch_duration: {}s", state.config.epoch_duration));
            }
            Err(e) => {
                lines.push(format!("  error: {}", e));
            }
        }

        lines.push(String::new());
        lines.push(format!("Daemon ({}):", ctx.client.base_url()));

        for (name, path) in [("livez", "/_status/livez"), ("readyz", "/_status/readyz")] {
            let status = match ctx.client.probe(path).await {
                Ok(status) if status.is_success() => "OK".to_string(),
                Ok(status) => format!("UNHEALTHY ({})", status),
                Err(_) => "NOT REACHABLE".to_string(),
            };
            lines.push(format!("  {:<7} {}", format!("{}:", name), status));
        }

        Ok(lines.join("\n"))
    }
}
