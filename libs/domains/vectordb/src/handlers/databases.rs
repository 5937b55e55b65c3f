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

use super::{DATABASES_TAG, DatabaseListResponse, SharedService};
use crate::error::VectorDbResult;
use crate::models::{CreateDatabase, Database};
use crate::pagination::PageRequest;
use crate::repository::{CollectionRepository, DatabaseRepository, PointRepository};

/// List databases
#[utoipa::path(
    get,
    path = "/databases",
    tag = DATABASES_TAG,
    params(PageRequest),
    responses(
        (status = 200, description = "Page of databases", body = DatabaseListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn list_databases<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Query(page): Query<PageRequest>,
) -> VectorDbResult<Json<DatabaseListResponse>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let page = service.list_databases(page).await?;
    Ok(Json(page.into()))
}

/// Create a database
#[utoipa::path(
    post,
    path = "/databases",
    tag = DATABASES_TAG,
    request_body = CreateDatabase,
    responses(
        (status = 201, description = "Database created", body = Database),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn create_database<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    ValidatedJson(input): ValidatedJson<CreateDatabase>,
) -> VectorDbResult<impl IntoResponse>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let database = service.create_database(&input.name).await?;
    Ok((StatusCode::CREATED, Json(Database::clone(&database))))
}

/// Get a database by name
#[utoipa::path(
    get,
    path = "/databases/{database}",
    tag = DATABASES_TAG,
    params(("database" = String, Path, description = "Database name")),
    responses(
        (status = 200, description = "Database found", body = Database),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_database<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path(database): Path<String>,
) -> VectorDbResult<Json<Database>>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    let database = service.get_database(&database).await?;
    Ok(Json(Database::clone(&database)))
}

/// Delete a database. Collections and points are not removed.
#[utoipa::path(
    delete,
    path = "/databases/{database}",
    tag = DATABASES_TAG,
    params(("database" = String, Path, description = "Database name")),
    responses(
        (status = 204, description = "Database deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn delete_database<D, C, P>(
    State(service): State<SharedService<D, C, P>>,
    Path(database): Path<String>,
) -> VectorDbResult<StatusCode>
where
    D: DatabaseRepository,
    C: CollectionRepository,
    P: PointRepository,
{
    service.delete_database(&database).await?;
    Ok(StatusCode::NO_CONTENT)
}
