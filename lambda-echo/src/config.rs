use lambda_runtime::Error;
use std::env::{args, var};
use std::path::Path;
use tracing::{debug, info};

/// Set by the Lambda platform for every function instance.
const RUNTIME_API_ENV_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

const USAGE: &str = "An AWS Lambda function that returns its event unchanged.

On AWS: deploy the binary as `bootstrap` with a custom runtime.
Locally: lambda-echo [payload_file], e.g. lambda-echo payload.json";

/// Payloads come from a local file, responses are printed to stdout
#[derive(Debug)]
pub struct LocalConfig {
    /// Payload as read from the local file. Can be anything as long as it's UTF-8
    pub payload: String,
    /// File name from which the payload was read, as provided in the param
    pub file_name: String,
}

/// Where the invocations come from
#[derive(Debug)]
pub enum InvocationSource {
    /// The Lambda Runtime API at AWS_LAMBDA_RUNTIME_API, e.g. 127.0.0.1:9001
    Runtime(String),
    Local(LocalConfig),
}

#[derive(Debug)]
pub struct Config {
    pub source: InvocationSource,
}

impl Config {
    /// Creates a new Config instance from the command line arguments and environment variables.
    /// A payload file in the first param has priority over the Runtime API.
    pub fn from_env() -> Result<Self, Error> {
        let source = match args().nth(1) {
            Some(param) if param == "--help" || param == "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            Some(payload_file) => InvocationSource::Local(read_local_payload(&payload_file)?),
            None => InvocationSource::Runtime(runtime_api()?),
        };

        Ok(Self { source })
    }

    /// Logs where the invocations come from. Call it after the tracing is initialized.
    pub fn log_source(&self) {
        match &self.source {
            InvocationSource::Runtime(api) => debug!("Runtime API: {api}"),
            InvocationSource::Local(local_config) => info!("Payload from: {}", local_config.file_name),
        }
    }
}

/// Returns the Runtime API endpoint or an error explaining how to run the function locally.
fn runtime_api() -> Result<String, Error> {
    check_runtime_api(var(RUNTIME_API_ENV_VAR).ok())
}

/// An empty value is treated the same as a missing one.
fn check_runtime_api(api: Option<String>) -> Result<String, Error> {
    match api {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::from(format!(
            "{RUNTIME_API_ENV_VAR} env var is not set. Is this running outside of Lambda?\n{USAGE}"
        ))),
    }
}

/// Reads the payload from a local file.
/// There is no point proceeding if the payload cannot be read, so any IO error is returned to the caller.
pub fn read_local_payload(payload_file: &str) -> Result<LocalConfig, Error> {
    match std::fs::read_to_string(Path::new(payload_file)) {
        Ok(payload) => Ok(LocalConfig {
            payload,
            file_name: payload_file.to_owned(),
        }),
        Err(e) => Err(Error::from(format!("Failed to read payload from {payload_file}: {e}"))),
    }
}
