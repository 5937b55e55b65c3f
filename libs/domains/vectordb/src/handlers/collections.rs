use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};

use super::{COLLECTIONS_TAG, CollectionListResponse, SharedService};
use crate::error::VectorDbResult;
use crate::models::{Collection, CreateCollection};
use crate::pagination::PageRequest;
use crate::repository::{CollectionRepository, DatabaseRepository, PointRepository};

/// List collections of a database
#[utoipa::path(
    get,
    path = "/databases/{database}/collections",
    tag = COLLECTIONS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        PageRequest
    ),
    responses(
        (status = 200, description = "Page of collections", body = CollectionListResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn list_collections<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path(database): Path<String>,
    Query(page): Query<PageRequest>,
) -> VectorDbResult<Json<CollectionListResponse>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let page = service.list_collections(&database, page).await?;
    Ok(Json(page.into()))
}

/// Create a collection
#[utoipa::path(
    post,
    path = "/databases/{database}/collections",
    tag = COLLECTIONS_TAG,
    params(("database" = String, Path, description = "Database name")),
    request_body = CreateCollection,
    responses(
        (status = 201, description = "Collection created", body = Collection),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn create_collection<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path(database): Path<String>,
    ValidatedJson(input): ValidatedJson<CreateCollection>,
) -> VectorDbResult<impl IntoResponse>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let collection = service.create_collection(&database, input).await?;
    Ok((StatusCode::CREATED, Json(Collection::clone(&collection))))
}

/// Get a collection
#[utoipa::path(
    get,
    path = "/databases/{database}/collections/{collection}",
    tag = COLLECTIONS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        ("collection" = String, Path, description = "Collection name")
    ),
    responses(
        (status = 200, description = "Collection found", body = Collection),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_collection<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path((database, collection)): Path<(String, String)>,
) -> VectorDbResult<Json<Collection>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let collection = service.get_collection(&database, &collection).await?;
    Ok(Json(Collection::clone(&collection)))
}

/// Delete a collection. Its points are not removed.
#[utoipa::path(
    delete,
    path = "/databases/{database}/collections/{collection}",
    tag = COLLECTIONS_TAG,
    params(
        ("database" = String, Path, description = "Database name"),
        ("collection" = String, Path, description = "Collection name")
    ),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn delete_collection<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path((database, collection)): Path<(String, String)>,
) -> VectorDbResult<StatusCode>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    service.delete_collection(&database, &collection).await?;
    Ok(StatusCode::NO_CONTENT)
}
