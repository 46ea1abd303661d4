use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;
use tracing::{error, info};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{AccountData, AccountResponse},
        Account, Error,
    },
    AppState,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    create_account_handler,
    list_accounts_handler,
    get_account_handler,
    update_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes
pub fn account_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_account_handler))
        .route("/", get(list_accounts_handler))
        .route("/:id", get(get_account_handler))
        .route("/:id", put(update_account_handler))
        .route("/:id", delete(delete_account_handler))
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/accounts",
    tag = ACCOUNT_API_GROUP,
    request_body = AccountData,
    responses(
        (status = 201, description = "Account successfully created", body = AccountResponse),
        (status = 400, description = "Malformed or incomplete account body"),
        (status = 415, description = "Content-Type is not application/json"),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    info!("Request to create an Account");
    check_content_type(&headers, "application/json")?;
    let body = parse_account_body(&body)?;

    let new_account = Account {
        id: 0,
        name: body.name,
        email: body.email,
        address: body.address,
        phone_number: body.phone_number,
        date_joined: body.date_joined.unwrap_or_else(|| Utc::now().date_naive()),
    };

    let account = state.db.create_account(&new_account).await?;
    let location = format!("/accounts/{}", account.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AccountResponse::from(account)),
    ))
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/accounts",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Every persisted account", body = [AccountResponse]),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, Error> {
    info!("GET request to /accounts");
    let accounts = state.db.list_accounts().await?;
    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account not found"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<AccountResponse>, Error> {
    let account = state.db.get_account_by_id(id).await?;
    let account = account.ok_or_else(|| not_found(id))?;

    Ok(Json(AccountResponse::from(account)))
}

/// Update account handler function
#[utoipa::path(
    put,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    request_body = AccountData,
    responses(
        (status = 200, description = "Account successfully updated", body = AccountResponse),
        (status = 400, description = "Malformed or incomplete account body"),
        (status = 404, description = "Account not found"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn update_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<AccountResponse>, Error> {
    // Lookup first: an update on a missing id is 404 even when the body is unusable
    let account = state.db.get_account_by_id(id).await?;

    if let Some(mut account) = account {
        let body = parse_account_body(&body)?;

        account.name = body.name;
        account.email = body.email;
        account.address = body.address;
        account.phone_number = body.phone_number;
        if let Some(date_joined) = body.date_joined {
            account.date_joined = date_joined;
        }

        let updated_account = state.db.update_account(&account).await?;

        Ok(Json(AccountResponse::from(updated_account)))
    } else {
        Err(not_found(id))
    }
}

/// Delete account handler function. Deletes are idempotent: a missing id
/// still yields 204.
#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 204, description = "Account deleted (or never existed)"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    state.db.delete_account(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn not_found(id: i32) -> Error {
    Error::new(
        StatusCode::NOT_FOUND,
        &format!("Account with id {id} could not be found"),
    )
}

/// Checks that the media type is correct
fn check_content_type(headers: &HeaderMap, media_type: &str) -> Result<(), Error> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if content_type == media_type || content_type.starts_with(&format!("{media_type};")) {
        return Ok(());
    }
    error!("Invalid Content-Type: {}", content_type);
    Err(Error::new(
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        &format!("Content-Type must be {media_type}"),
    ))
}

fn parse_account_body(body: &[u8]) -> Result<AccountData, Error> {
    serde_json::from_slice(body).map_err(|e| {
        error!("Failed to deserialize account body: {}", e);
        Error::new(StatusCode::BAD_REQUEST, &e.to_string())
    })
}
