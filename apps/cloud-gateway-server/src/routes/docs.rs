//! Interactive API documentation
//!
//! Serves a Swagger UI page and the OpenAPI document it renders. The root
//! path redirects to the page.

use axum::{
    response::{Html, Redirect},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};

use crate::state::AppState;

pub const DOCS_PATH: &str = "/swagger/index.html";
pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Cloud Gateway API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger/v1/swagger.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Create the documentation router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(DOCS_PATH) }))
        .route(DOCS_PATH, get(|| async { Html(SWAGGER_UI_HTML) }))
        .route(OPENAPI_PATH, get(|| async { Json(openapi_document()) }))
}

fn path_param(name: &str) -> Value {
    json!({"name": name, "in": "path", "required": true, "schema": {"type": "string"}})
}

fn text_response(description: &str) -> Value {
    json!({"description": description, "content": {"text/plain": {"schema": {"type": "string"}}}})
}

fn string_list_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"type": "array", "items": {"type": "string"}}}}
    })
}

/// OpenAPI 3 description of every gateway endpoint
pub fn openapi_document() -> Value {
    let item_schema = json!({
        "type": "object",
        "description": "Attribute map in DynamoDB JSON form; must contain \"id\"",
        "additionalProperties": {"type": "object"},
        "example": {"id": {"S": "42"}, "name": {"S": "widget"}}
    });

    let mut paths = Map::new();
    paths.insert(
        "/s3/buckets".to_string(),
        json!({
            "get": {
                "operationId": "GetBuckets",
                "tags": ["Buckets"],
                "responses": {"200": string_list_response("Bucket names")}
            }
        }),
    );
    paths.insert(
        "/s3/buckets/{bucketName}".to_string(),
        json!({
            "post": {
                "operationId": "CreateBucket",
                "tags": ["Buckets"],
                "parameters": [path_param("bucketName")],
                "responses": {
                    "201": text_response("Created bucket name"),
                    "400": text_response("Failed to create bucket")
                }
            },
            "delete": {
                "operationId": "DeleteBucket",
                "tags": ["Buckets"],
                "parameters": [path_param("bucketName")],
                "responses": {
                    "200": text_response("Bucket deleted"),
                    "400": text_response("Failed to delete bucket")
                }
            }
        }),
    );
    paths.insert(
        "/s3/objects/{bucketName}".to_string(),
        json!({
            "get": {
                "operationId": "GetObjects",
                "tags": ["Objects"],
                "parameters": [path_param("bucketName")],
                "responses": {"200": string_list_response("Up to 100 object keys")}
            }
        }),
    );
    paths.insert(
        "/s3/objects/{bucketName}/{objectKey}".to_string(),
        json!({
            "put": {
                "operationId": "PutObject",
                "tags": ["Objects"],
                "parameters": [path_param("bucketName"), path_param("objectKey")],
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/octet-stream": {"schema": {"type": "string", "format": "binary"}}
                    }
                },
                "responses": {
                    "200": text_response("Object uploaded or replaced"),
                    "400": text_response("Failed to upload/update object")
                }
            },
            "delete": {
                "operationId": "DeleteObject",
                "tags": ["Objects"],
                "parameters": [path_param("bucketName"), path_param("objectKey")],
                "responses": {
                    "200": text_response("Object deleted"),
                    "400": text_response("Failed to delete object")
                }
            }
        }),
    );
    paths.insert(
        "/dynamodb/items".to_string(),
        json!({
            "get": {
                "operationId": "GetDynamoItems",
                "tags": ["DynamoDB"],
                "responses": {
                    "200": {
                        "description": "Items returned by a single scan",
                        "content": {
                            "application/json": {"schema": {"type": "array", "items": item_schema.clone()}}
                        }
                    }
                }
            },
            "post": {
                "operationId": "PutDynamoItem",
                "tags": ["DynamoDB"],
                "requestBody": {
                    "required": true,
                    "content": {"application/json": {"schema": item_schema}}
                },
                "responses": {
                    "200": text_response("Item saved"),
                    "400": text_response("Missing id or malformed item")
                }
            }
        }),
    );
    paths.insert(
        "/dynamodb/items/{id}".to_string(),
        json!({
            "delete": {
                "operationId": "DeleteDynamoItem",
                "tags": ["DynamoDB"],
                "parameters": [path_param("id")],
                "responses": {"200": text_response("Item deleted")}
            }
        }),
    );

    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "Cloud Gateway",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": paths
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::routes::test_support::{test_app, test_state};

    #[tokio::test]
    async fn test_root_redirects_to_docs() {
        let app = test_app();

        let response = app.server.get("/").await;
        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header(header::LOCATION), DOCS_PATH);
    }

    #[tokio::test]
    async fn test_docs_page_points_at_document() {
        let app = test_app();

        let response = app.server.get(DOCS_PATH).await;
        response.assert_status_ok();
        let page = response.text();
        assert!(page.contains(OPENAPI_PATH));
        assert!(page.contains("dom_id: \"#swagger-ui\""));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[tokio::test]
    async fn test_document_is_served_via_router() {
        let app: Router = router().with_state(test_state());

        let response = app
            .oneshot(Request::get(OPENAPI_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["openapi"], "3.0.1");
    }

    #[test]
    fn test_document_lists_every_operation() {
        let doc = openapi_document();
        let mut operation_ids: Vec<&str> = doc["paths"]
            .as_object()
            .unwrap()
            .values()
            .flat_map(|methods| methods.as_object().unwrap().values())
            .filter_map(|op| op["operationId"].as_str())
            .collect();
        operation_ids.sort_unstable();

        assert_eq!(
            operation_ids,
            vec![
                "CreateBucket",
                "DeleteBucket",
                "DeleteDynamoItem",
                "DeleteObject",
                "GetBuckets",
                "GetDynamoItems",
                "GetObjects",
                "PutDynamoItem",
                "PutObject",
            ]
        );
    }
}
