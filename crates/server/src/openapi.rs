use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct PongDoc {
    #[schema(example = "pong")]
    pub message: String,
}

/// Create body. `addr` is accepted as an alias of `address`.
#[derive(ToSchema)]
pub struct CreateRestaurantDoc {
    #[schema(example = "Tani")]
    pub name: String,
    #[schema(example = "10 Pham Van Dong")]
    pub address: String,
}

/// Partial update body; omitted or null fields are left untouched.
#[derive(ToSchema)]
pub struct UpdateRestaurantDoc {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(ToSchema)]
pub struct RestaurantDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct IdResponseDoc {
    pub data: i32,
}

#[derive(ToSchema)]
pub struct RestaurantResponseDoc {
    pub data: RestaurantDoc,
}

#[derive(ToSchema)]
pub struct RestaurantListDoc {
    pub data: Vec<RestaurantDoc>,
}

#[derive(ToSchema)]
pub struct AckDoc {
    pub data: bool,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::ping,
        crate::routes::restaurants::create,
        crate::routes::restaurants::get,
        crate::routes::restaurants::list,
        crate::routes::restaurants::update,
        crate::routes::restaurants::delete,
    ),
    components(
        schemas(
            PongDoc,
            CreateRestaurantDoc,
            UpdateRestaurantDoc,
            RestaurantDoc,
            IdResponseDoc,
            RestaurantResponseDoc,
            RestaurantListDoc,
            AckDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants")
    )
)]
pub struct ApiDoc;
