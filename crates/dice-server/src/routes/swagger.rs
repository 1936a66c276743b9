//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateDiceRequest, DiceResponse, RollResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::dice::list_dices,
        super::dice::create_dice,
        super::dice::get_dice,
        super::dice::roll_dice,
        super::dice::delete_dice,
    ),
    info(
        title = "Dice API",
        version = "0.1.0",
        description = "Create, list, fetch, delete and roll dice with 1 to 1000 faces.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Dice", description = "Dice management and rolling"),
    ),
    components(
        schemas(
            CreateDiceRequest,
            DiceResponse,
            RollResponse,
        )
    ),
)]
pub struct ApiDoc;
