//! API Gateway v2 (HTTP API) adapter for the Lambda runtime.
//!
//! Event -> `VisitRequest` -> core handler -> `ApiGatewayV2httpResponse`.
//! The function always returns `Ok`; business failures travel in the
//! status code and body.

use aws_lambda_events::apigw::{ApiGatewayV2httpRequest, ApiGatewayV2httpResponse};
use aws_lambda_events::encodings::Body;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use lambda_runtime::{service_fn, Error, LambdaEvent};

use pagehits_core::{handle_request, VisitRequest, VisitResponse};

use crate::app_state::AppState;

pub fn to_visit_request(event: ApiGatewayV2httpRequest) -> VisitRequest {
    VisitRequest::new(event.request_context.http.method, event.path_parameters)
}

pub fn to_lambda_response(resp: VisitResponse) -> ApiGatewayV2httpResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(resp.content_type()));

    ApiGatewayV2httpResponse {
        status_code: i64::from(resp.status.as_u16()),
        headers,
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(resp.body)),
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

pub async fn handle_event(
    state: &AppState,
    event: ApiGatewayV2httpRequest,
) -> ApiGatewayV2httpResponse {
    let req = to_visit_request(event);
    to_lambda_response(handle_request(state.service().as_ref(), &req).await)
}

/// Run the Lambda event loop until the runtime shuts the process down.
pub async fn run(state: AppState) -> Result<(), Error> {
    tracing::info!(table = %state.cfg().store.table_name, "pagehits lambda starting");
    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiGatewayV2httpRequest>| {
        let state = state.clone();
        async move { Ok::<_, Error>(handle_event(&state, event.payload).await) }
    }))
    .await
}
