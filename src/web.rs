use std::{convert::Infallible, net::SocketAddr, path::PathBuf};

use async_graphql::http::GraphiQLSource;
use async_graphql_warp::{GraphQLBadRequest, GraphQLResponse};
use tracing::info;
use warp::{
    http::{Response as HttpResponse, StatusCode},
    Filter, Rejection,
};

use crate::api::Schema;

/// Certificate and key for serving HTTPS.
pub struct Tls {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Serves GraphQL queries at `/` over POST, and GraphiQL over GET.
pub async fn serve(schema: Schema, addr: SocketAddr, tls: Option<Tls>) {
    let graphql_post = async_graphql_warp::graphql(schema).and_then(
        |(schema, request): (Schema, async_graphql::Request)| async move {
            Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
        },
    );

    let graphiql = warp::path::end().and(warp::get()).map(|| {
        HttpResponse::builder()
            .header("content-type", "text/html")
            .body(GraphiQLSource::build().endpoint("/").finish())
    });

    let routes = graphiql
        .or(graphql_post)
        .recover(|err: Rejection| async move {
            if let Some(GraphQLBadRequest(err)) = err.find() {
                return Ok::<_, Infallible>(warp::reply::with_status(
                    err.to_string(),
                    StatusCode::BAD_REQUEST,
                ));
            }
            Ok(warp::reply::with_status(
                "INTERNAL_SERVER_ERROR".to_string(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        });

    if let Some(tls) = tls {
        info!("Listening on https://{addr}");
        warp::serve(routes)
            .tls()
            .cert_path(tls.cert)
            .key_path(tls.key)
            .run(addr)
            .await;
    } else {
        info!("Listening on http://{addr}");
        warp::serve(routes).run(addr).await;
    }
}
