pub mod account;
pub mod message;
pub mod service;
pub use account::*;
pub use message::Message;
pub use service::*;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            AccountData,
            AccountResponse,
            HealthResponse,
            ServiceInfo,
            Message,
        ),
    )
)]
/// Captures OpenAPI schemas and canned responses defined in the DTO module
pub struct OpenApiSchemas;
