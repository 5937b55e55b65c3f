//! HTTP interface over [`VectorDbService`].
//!
//! Every request runs inside a child of the span handed to [`router`], so a
//! binary can tag all vector database traffic with its own fields.

mod collections;
mod databases;
mod points;
mod types;

use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, post},
};
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa::OpenApi;

use crate::models::{
    Collection, CreateCollection, CreateDatabase, Database, NewPoint, Point, ScoredPoint,
    SearchRequest, SearchResponse,
};
use crate::repository::{CollectionRepository, DatabaseRepository, PointRepository};
use crate::service::VectorDbService;

pub use types::{
    CollectionListResponse, DatabaseListResponse, PointIdsRequest, PointsResponse,
    UpsertPointsRequest, UpsertPointsResponse,
};

pub(crate) const DATABASES_TAG: &str = "databases";
pub(crate) const COLLECTIONS_TAG: &str = "collections";
pub(crate) const POINTS_TAG: &str = "points";

type SharedService<D, C, P> = Arc<VectorDbService<D, C, P>>;

/// OpenAPI documentation for the vector database API
#[derive(OpenApi)]
#[openapi(
    paths(
        databases::list_databases,
        databases::create_database,
        databases::get_database,
        databases::delete_database,
        collections::list_collections,
        collections::create_collection,
        collections::get_collection,
        collections::delete_collection,
        points::upsert_points,
        points::get_point,
        points::get_points,
        points::delete_points,
        points::search,
    ),
    components(
        schemas(
            Database, CreateDatabase, DatabaseListResponse,
            Collection, CreateCollection, CollectionListResponse,
            Point, NewPoint, UpsertPointsRequest, UpsertPointsResponse,
            PointIdsRequest, PointsResponse,
            SearchRequest, SearchResponse, ScoredPoint
        ),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = DATABASES_TAG, description = "Database management"),
        (name = COLLECTIONS_TAG, description = "Collections within a database"),
        (name = POINTS_TAG, description = "Point storage and search")
    )
)]
pub struct ApiDoc;

/// Build the vector database router.
///
/// Request spans are created as children of `span`.
pub fn router<D, C, P>(service: VectorDbService<D, C, P>, span: Span) -> Router
where
    D: DatabaseRepository + 'static,
    C: CollectionRepository + 'static,
    P: PointRepository + 'static,
{
    let shared_service: SharedService<D, C, P> = Arc::new(service);
    let collection = "/databases/{database}/collections/{collection}";

    Router::new()
        .route(
            "/databases",
            get(databases::list_databases::<D, C, P>)
                .post(databases::create_database::<D, C, P>),
        )
        .route(
            "/databases/{database}",
            get(databases::get_database::<D, C, P>)
                .delete(databases::delete_database::<D, C, P>),
        )
        .route(
            "/databases/{database}/collections",
            get(collections::list_collections::<D, C, P>)
                .post(collections::create_collection::<D, C, P>),
        )
        .route(
            collection,
            get(collections::get_collection::<D, C, P>)
                .delete(collections::delete_collection::<D, C, P>),
        )
        .route(
            &format!("{collection}/points"),
            post(points::upsert_points::<D, C, P>),
        )
        .route(
            &format!("{collection}/points:get"),
            post(points::get_points::<D, C, P>),
        )
        .route(
            &format!("{collection}/points:delete"),
            post(points::delete_points::<D, C, P>),
        )
        .route(
            &format!("{collection}/points/{{point_id}}"),
            get(points::get_point::<D, C, P>),
        )
        .route(
            &format!("{collection}/search"),
            post(points::search::<D, C, P>),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
                tracing::info_span!(
                    parent: &span,
                    "vectordb_request",
                    method = %request.method(),
                    path = %request.uri().path()
                )
            }),
        )
        .with_state(shared_service)
}
