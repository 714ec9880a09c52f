use crate::config::LocalConfig;
use crate::handler;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

/// A request ID substitute for local file payloads.
pub const LOCAL_REQUEST_ID: &str = "local-request-id";

/// Far enough in the future for any local invocation (2034).
const LOCAL_DEADLINE_MS: u64 = 2035313041000;

const LOCAL_FUNCTION_ARN: &str = "from-local-payload";

/// Runs the handler once against the payload from a local file.
/// The payload must be valid JSON.
pub async fn invoke(local_config: &LocalConfig) -> Result<Value, Error> {
    let payload: Value = match serde_json::from_str(&local_config.payload) {
        Ok(v) => v,
        Err(e) => {
            return Err(Error::from(format!(
                "Invalid JSON payload in {}: {e}",
                local_config.file_name
            )));
        }
    };

    info!("Lambda request: sending payload from file");
    debug!("Payload: {payload}");

    handler::handler(LambdaEvent::new(payload, local_context())).await
}

/// Builds a context that resembles what the Runtime API would send for a local payload.
fn local_context() -> Context {
    let mut ctx = Context::default();
    ctx.request_id = LOCAL_REQUEST_ID.to_owned();
    ctx.deadline = LOCAL_DEADLINE_MS;
    ctx.invoked_function_arn = LOCAL_FUNCTION_ARN.to_owned();
    ctx
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::read_local_payload;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn payload_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn echoes_payload_from_file() {
        let file = payload_file(r#"{ "a": [1, 2, 3], "b": { "c": null } }"#);
        let local_config = read_local_payload(&file.path().to_string_lossy()).unwrap();

        let resp = invoke(&local_config).await.unwrap();

        assert_eq!(resp, json!({ "a": [1, 2, 3], "b": { "c": null } }));
    }

    #[tokio::test]
    async fn empty_object_from_file() {
        let local_config = LocalConfig {
            payload: "{}".to_owned(),
            file_name: "empty.json".to_owned(),
        };

        assert_eq!(invoke(&local_config).await.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn invalid_json_names_the_file() {
        let local_config = LocalConfig {
            payload: "not json".to_owned(),
            file_name: "broken.json".to_owned(),
        };

        let err = invoke(&local_config).await.unwrap_err();

        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn local_context_is_populated() {
        let ctx = local_context();
        assert_eq!(ctx.request_id, LOCAL_REQUEST_ID);
        assert_eq!(ctx.deadline, LOCAL_DEADLINE_MS);
        assert_eq!(ctx.invoked_function_arn, LOCAL_FUNCTION_ARN);
    }
}
