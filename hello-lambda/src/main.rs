/// A stand-in backend for an API Gateway proxy integration.
/// Always returns the same canned response so deployment tests can
/// assert against a known payload.
use lambda_runtime::{service_fn, tracing, Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// The shape API Gateway expects back from a proxy-integration lambda.
#[derive(Serialize, Debug, PartialEq)]
struct ProxyResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    headers: ResponseHeaders,
    body: String,
}

#[derive(Serialize, Debug, PartialEq)]
struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    content_type: String,
}

/// The one and only response this lambda produces.
/// The body is a pre-serialized JSON string, as API Gateway requires.
fn canned_response() -> ProxyResponse {
    ProxyResponse {
        status_code: 200,
        headers: ResponseHeaders {
            content_type: "application/json".to_owned(),
        },
        body: r#"{"message": "Hello from Lambda!"}"#.to_owned(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let func = service_fn(my_handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// The event is deserialized as raw JSON and ignored: any payload,
/// including an empty object, gets the same response.
pub(crate) async fn my_handler(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    info!("Request ID: {}", event.context.request_id);

    Ok(canned_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    async fn invoke(payload: Value) -> ProxyResponse {
        let event = LambdaEvent::new(payload, Context::default());
        my_handler(event).await.expect("handler cannot fail")
    }

    #[tokio::test]
    async fn empty_event_gets_the_canned_response() {
        let resp = invoke(json!({})).await;

        assert_eq!(resp, canned_response());
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, r#"{"message": "Hello from Lambda!"}"#);
    }

    #[tokio::test]
    async fn event_contents_are_ignored() {
        let resp = invoke(json!({
            "httpMethod": "POST",
            "path": "/orders",
            "body": "{\"id\": 42}"
        }))
        .await;

        assert_eq!(resp, canned_response());
    }

    #[tokio::test]
    async fn non_object_event_still_succeeds() {
        // API Gateway always sends an object, but the handler
        // must not depend on that
        assert_eq!(invoke(json!("not a mapping")).await, canned_response());
        assert_eq!(invoke(Value::Null).await, canned_response());
    }

    #[tokio::test]
    async fn repeated_invocations_are_identical() {
        assert_eq!(invoke(json!({})).await, invoke(json!({})).await);
    }

    #[test]
    fn response_serializes_with_api_gateway_field_names() {
        let serialized = serde_json::to_value(canned_response()).expect("serializable");

        assert_eq!(
            serialized,
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{\"message\": \"Hello from Lambda!\"}"
            })
        );
    }
}
