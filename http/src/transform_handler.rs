use hex_transform::*;

use actix_web::{error, web, HttpRequest, HttpResponse};
use actix_web::error::InternalError;
use log::*;
use serde_json::json;

///
/// Structure of a request sent to the transform handler
///
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TransformRequest {
    /// The operation to apply, along with its parameters
    #[serde(flatten)]
    pub op: TransformOp,

    /// The vertices to transform (requests that don't supply any start from the original shape)
    #[serde(default = "original_shape")]
    pub shape: Shape
}

///
/// Structure of a transform handler response
///
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TransformResponse {
    /// The transformed vertices, in the same order they were supplied
    pub shape: Shape
}

///
/// Builds the JSON body used for every client error
///
fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}

///
/// Turns a JSON payload problem (bad syntax, an unknown op, missing or mistyped
/// parameters) into the uniform error response
///
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(&err.to_string());

    InternalError::from_response(err, response).into()
}

///
/// Applies the requested operation to the vertices in the request
///
async fn handle_transform(request: web::Json<TransformRequest>) -> HttpResponse {
    let TransformRequest { op, shape } = request.into_inner();

    // Non-finite parameters are rejected before they can poison the vertices
    if !op.is_finite() {
        warn!("Rejecting {:?}: parameters must be finite", op);

        return bad_request("Transform parameters must be finite numbers");
    }

    let transformed = op.apply(&shape);

    debug!("Applied {:?} to {} vertices", op, transformed.len());

    HttpResponse::Ok().json(TransformResponse { shape: transformed })
}

///
/// Returns the shape every session starts from
///
async fn handle_original_shape() -> HttpResponse {
    HttpResponse::Ok().json(TransformResponse { shape: original_shape() })
}

///
/// Registers the transformation API endpoints
///
pub fn transform_handler(config: &mut web::ServiceConfig) {
    config.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(web::resource("/transform").route(web::post().to(handle_transform)))
            .service(web::resource("/shape").route(web::get().to(handle_original_shape)))
    );
}
