use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};

use super::{
    POINTS_TAG, PointIdsRequest, PointsResponse, SharedService, UpsertPointsRequest,
    UpsertPointsResponse,
};
use crate::error::VectorDbResult;
use crate::models::{Point, SearchRequest, SearchResponse};
use crate::repository::{CollectionRepository, DatabaseRepository, PointRepository};

/// Insert or replace points
///
/// Points belong to this exact collection: a same-named collection in another
/// database, or a recreation of this one after delete, does not see them.
#[utoipa::path(
    post,
    path = "/databases/{database}/collections/{collection}/points",
    tag = POINTS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        ("collection" = String, Path, description = "Collection name")
    ),
    request_body = UpsertPointsRequest,
    responses(
        (status = 200, description = "Ids of the written points", body = UpsertPointsResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn upsert_points<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path((database, collection)): Path<(String, String)>,
    ValidatedJson(input): ValidatedJson<UpsertPointsRequest>,
) -> VectorDbResult<Json<UpsertPointsResponse>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let ids = service
        .upsert_points(&database, &collection, input.points)
        .await?;
    Ok(Json(UpsertPointsResponse {
        count: ids.len(),
        ids,
    }))
}

/// Get a single point
#[utoipa::path(
    get,
    path = "/databases/{database}/collections/{collection}/points/{point_id}",
    tag = POINTS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        ("collection" = String, Path, description = "Collection name"),
        ("point_id" = String, Path, description = "Point id")
    ),
    responses(
        (status = 200, description = "Point found", body = Point),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_point<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path((database, collection, point_id)): Path<(String, String, String)>,
) -> VectorDbResult<Json<Point>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let point = service.get_point(&database, &collection, &point_id).await?;
    Ok(Json(Point::clone(&point)))
}

/// Get several points; unknown ids are omitted from the result
#[utoipa::path(
    post,
    path = "/databases/{database}/collections/{collection}/points:get",
    tag = POINTS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        ("collection" = String, Path, description = "Collection name")
    ),
    request_body = PointIdsRequest,
    responses(
        (status = 200, description = "Points found, in request order", body = PointsResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_points<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path((database, collection)): Path<(String, String)>,
    ValidatedJson(input): ValidatedJson<PointIdsRequest>,
) -> VectorDbResult<Json<PointsResponse>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let points = service
        .get_points(&database, &collection, &input.ids)
        .await?;
    Ok(Json(points.into()))
}

/// Delete points; unknown ids are ignored
#[utoipa::path(
    post,
    path = "/databases/{database}/collections/{collection}/points:delete",
    tag = POINTS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        ("collection" = String, Path, description = "Collection name")
    ),
    request_body = PointIdsRequest,
    responses(
        (status = 204, description = "Points deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn delete_points<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path((database, collection)): Path<(String, String)>,
    ValidatedJson(input): ValidatedJson<PointIdsRequest>,
) -> VectorDbResult<StatusCode>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    service
        .delete_points(&database, &collection, &input.ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search a collection.
///
/// Results are not ranked yet: up to `limit` points are returned, each with
/// a distance of zero.
#[utoipa::path(
    post,
    path = "/databases/{database}/collections/{collection}/search",
    tag = POINTS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        ("collection" = String, Path, description = "Collection name")
    ),
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn search<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path((database, collection)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<SearchRequest>,
) -> VectorDbResult<Json<SearchResponse>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let response = service.search(&database, &collection, request).await?;
    Ok(Json(response))
}
