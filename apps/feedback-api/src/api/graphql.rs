//! GraphQL endpoints
//!
//! - `POST /graphql` executes operations
//! - `GET /graphql` serves GraphiQL
//! - `GET /graphql/schema` returns the SDL

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::graphql::AppSchema;

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route(
            "/graphql",
            get(graphiql).post_service(GraphQL::new(schema.clone())),
        )
        .route("/graphql/schema", get(sdl))
        .with_state(schema)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn sdl(State(schema): State<AppSchema>) -> String {
    schema.sdl()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::offline_schema;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_graphql_serves_graphiql() {
        let response = router(offline_schema().await)
            .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("graphiql"));
    }

    #[tokio::test]
    async fn test_get_schema_returns_sdl() {
        let response = router(offline_schema().await)
            .oneshot(
                Request::builder()
                    .uri("/graphql/schema")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("createFeedback"));
    }

    #[tokio::test]
    async fn test_post_rejects_invalid_rating_without_database() {
        let body = serde_json::json!({
            "query": "mutation { createFeedback(input: { rating: 6, comment: \"Great video\", user: \"alice\", videoId: \"65a1b2c3d4e5f6a7b8c9d0e1\" }) { id } }"
        });

        let response = router(offline_schema().await)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
        assert!(json["data"].is_null());
    }
}
