use lambda_echo::config::{Config, InvocationSource};
use lambda_echo::{handler, init_tracing, local};
use lambda_runtime::{service_fn, Error};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // the config decides where the logs go, so it is read before the tracing is up
    let config = Config::from_env()?;
    init_tracing(&config.source);
    config.log_source();

    match &config.source {
        InvocationSource::Runtime(_) => {
            if let Err(e) = lambda_runtime::run(service_fn(handler::handler)).await {
                error!("Runtime error: {:?}", e);
                return Err(e);
            }
        }
        InvocationSource::Local(local_config) => {
            let response = local::invoke(local_config).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
