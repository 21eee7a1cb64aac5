use actix_web::{web, HttpResponse};

use crate::api::dtos::{AddressRequest, DistanceQuery};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/address/", web::get().to(list_addresses))
        .route("/address/", web::post().to(create_address))
        .route("/address/{id}", web::get().to(get_address))
        .route("/address/{id}", web::put().to(update_address))
        .route("/address/{id}", web::delete().to(delete_address))
        .route(
            "/address-by-distance/",
            web::get().to(list_addresses_by_distance),
        );
}

#[utoipa::path(
    get,
    path = "/address/",
    responses(
        (status = 200, description = "Every stored entry", body = [crate::api::dtos::AddressResponse])
    ),
    tag = "address"
)]
pub async fn list_addresses(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.address_service.list().await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/address/",
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Entry created", body = crate::api::dtos::AddressResponse),
        (status = 422, description = "Body does not match the entry schema", body = crate::api::dtos::ErrorResponse)
    ),
    tag = "address"
)]
pub async fn create_address(
    state: web::Data<AppState>,
    payload: web::Json<AddressRequest>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/address/{id}",
    params(("id" = i64, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry found", body = crate::api::dtos::AddressResponse),
        (status = 404, description = "No entry has this id", body = crate::api::dtos::ErrorResponse)
    ),
    tag = "address"
)]
pub async fn get_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    put,
    path = "/address/{id}",
    params(("id" = i64, Path, description = "Entry id")),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Submitted fields echoed with the id", body = crate::api::dtos::AddressResponse),
        (status = 404, description = "No entry has this id and missing ids are rejected", body = crate::api::dtos::ErrorResponse),
        (status = 422, description = "Body does not match the entry schema", body = crate::api::dtos::ErrorResponse)
    ),
    tag = "address"
)]
pub async fn update_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<AddressRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .address_service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/address/{id}",
    params(("id" = i64, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Id of the deleted entry", body = crate::api::dtos::DeletedAddressResponse),
        (status = 404, description = "No entry has this id and missing ids are rejected", body = crate::api::dtos::ErrorResponse)
    ),
    tag = "address"
)]
pub async fn delete_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/address-by-distance/",
    params(DistanceQuery),
    responses(
        (status = 200, description = "Entries within the radius, in store order", body = [crate::api::dtos::AddressResponse]),
        (status = 422, description = "Missing or invalid query parameters", body = crate::api::dtos::ErrorResponse)
    ),
    tag = "address"
)]
pub async fn list_addresses_by_distance(
    state: web::Data<AppState>,
    query: web::Query<DistanceQuery>,
) -> AppResult<HttpResponse> {
    let search = query.into_inner().into_search()?;
    let result = state.address_service.find_within_radius(search).await?;
    Ok(HttpResponse::Ok().json(result))
}
