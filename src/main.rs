use mimalloc::MiMalloc;
use ppg_action::ci::{ActionOutputs, CiContext, WorkflowCommand};
use ppg_action::config::Config;
use ppg_action::{ActionError, ProviderClient, ProvisionRequest, Provisioner};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => return fail(&ActionError::from(e)),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        api_url = %cfg.api.url,
        proxy = %cfg.api.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
        project_id = %cfg.project_id.as_deref().unwrap_or("<unset>"),
        region = %cfg.region.as_deref().unwrap_or("<default>"),
        timeout_secs = cfg.timeout_secs,
        loglevel = %cfg.loglevel,
        "Configuration loaded"
    );

    match run(&cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

async fn run(cfg: &Config) -> Result<(), ActionError> {
    let ci = CiContext::from_env()?;
    let request = ProvisionRequest::from_config(cfg, ci);
    let client = ProviderClient::from_config(&cfg.api)?;

    let result = Provisioner::new(client)
        .provision_within(&request, cfg.deadline())
        .await?;

    ActionOutputs::from_env().emit(&result)?;

    info!(outcome = %result.outcome, "✅ Database provisioned successfully!");
    info!("Database name: {}", result.database_name);
    info!("Database ID: {}", result.database_id);
    Ok(())
}

/// Reports `err` to the runner and marks the step failed. No outputs are written.
fn fail(err: &ActionError) -> ExitCode {
    let message = err.to_string();
    error!(error = %message, "Provisioning failed");
    println!("{}", WorkflowCommand::Error(&message));
    ExitCode::FAILURE
}
