use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Address book endpoints
        crate::api::routes::addresses::list_addresses,
        crate::api::routes::addresses::create_address,
        crate::api::routes::addresses::get_address,
        crate::api::routes::addresses::update_address,
        crate::api::routes::addresses::delete_address,
        crate::api::routes::addresses::list_addresses_by_distance,
        // Health check
        crate::api::routes::root,
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::address_dto::AddressRequest,
            crate::api::dtos::address_dto::AddressResponse,
            crate::api::dtos::address_dto::DeletedAddressResponse,
            crate::api::dtos::common::ErrorResponse,
            crate::api::dtos::common::ErrorDetail,
            crate::api::dtos::common::MessageResponse,
        )
    ),
    tags(
        (name = "address", description = "Address book entries and proximity search"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Address Book API",
        version = "0.1.0",
        description = "Stores named addresses with coordinates and finds entries near a point",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;
