/// A TOKEN-type API Gateway authorizer for deployment tests.
/// The only accepted token is the literal `allow`. Everything else
/// fails with "Unauthorized", which API Gateway turns into a 401.
use lambda_runtime::{service_fn, tracing, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The TOKEN authorizer event as delivered by API Gateway.
/// Both fields may be missing from hand-crafted test events.
#[derive(Deserialize, Debug)]
struct AuthorizerRequest {
    #[serde(rename = "authorizationToken", default)]
    authorization_token: String,
    #[serde(rename = "methodArn", default = "default_method_arn")]
    method_arn: String,
}

fn default_method_arn() -> String {
    "*".to_owned()
}

/// The IAM policy returned to API Gateway on a successful check.
#[derive(Serialize, Debug, PartialEq)]
struct AuthorizerPolicy {
    #[serde(rename = "principalId")]
    principal_id: String,
    #[serde(rename = "policyDocument")]
    policy_document: PolicyDocument,
}

#[derive(Serialize, Debug, PartialEq)]
struct PolicyDocument {
    #[serde(rename = "Version")]
    version: String,
    #[serde(rename = "Statement")]
    statement: Vec<PolicyStatement>,
}

#[derive(Serialize, Debug, PartialEq)]
struct PolicyStatement {
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "Effect")]
    effect: String,
    #[serde(rename = "Resource")]
    resource: String,
}

/// Outcome of the token check.
/// `Denied` carries no detail because API Gateway only acts on the
/// literal "Unauthorized" error message from the lambda.
#[derive(Debug, PartialEq)]
enum Decision {
    Allowed(AuthorizerPolicy),
    Denied,
}

/// The entire authorization scheme: strict equality with the literal
/// `allow`. This is a test stub, not a real token check, and the
/// literal must stay as-is for fixture compatibility.
fn authorize(token: &str, method_arn: &str) -> Decision {
    if token == "allow" {
        Decision::Allowed(AuthorizerPolicy {
            principal_id: "user123".to_owned(),
            policy_document: PolicyDocument {
                version: "2012-10-17".to_owned(),
                statement: vec![PolicyStatement {
                    action: "execute-api:Invoke".to_owned(),
                    effect: "Allow".to_owned(),
                    resource: method_arn.to_owned(),
                }],
            },
        })
    } else {
        Decision::Denied
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

pub(crate) async fn my_handler(event: LambdaEvent<AuthorizerRequest>) -> Result<AuthorizerPolicy, Error> {
    let request = event.payload;

    info!("Token check for {}", request.method_arn);

    match authorize(&request.authorization_token, &request.method_arn) {
        Decision::Allowed(policy) => Ok(policy),
        // propagate to the runtime; API Gateway maps it to a denial
        Decision::Denied => Err(Error::from("Unauthorized")),
    }
}
