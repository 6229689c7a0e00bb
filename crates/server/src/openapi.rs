use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ProductDoc {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct CreateProductDoc {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct UpdateProductDoc {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct TermDoc {
    pub weeks: u32,
    pub normal_rate: f64,
    pub punctual_rate: f64,
}

#[derive(ToSchema)]
pub struct QuoteRequestDoc {
    pub sku: String,
    pub weeks: u32,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct QuoteDoc {
    pub normalPayment: f64,
    pub punctualPayment: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::terms::list,
        crate::routes::terms::create,
        crate::routes::quote::create,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            CreateProductDoc,
            UpdateProductDoc,
            TermDoc,
            QuoteRequestDoc,
            QuoteDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "terms"),
        (name = "quote")
    )
)]
pub struct ApiDoc;
