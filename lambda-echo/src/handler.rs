use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tracing::debug;

/// Returns the event as-is. The context is accepted to match the Lambda handler shape, but is never read.
pub fn echo(event: Value, _ctx: &Context) -> Value {
    event
}

/// The function handed over to the Lambda runtime.
/// Any JSON value is echoed back, including non-object payloads.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (event, ctx) = event.into_parts();

    debug!("Event: {:?}", event);
    debug!("Context: {:?}", ctx);

    Ok(echo(event, &ctx))
}
