use axum::{http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::models::player::{NewPlayer, PlayerCreated};

#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = NewPlayer,
    responses(
        (status = 201, description = "Player created", body = PlayerCreated),
        (status = 400, description = "Under 10 or unknown sex", body = ErrorBody),
        (status = 422, description = "Body does not decode", body = ErrorBody)
    )
)]
pub async fn create_player(
    WithRejection(Json(body), _): WithRejection<Json<NewPlayer>, AppError>,
) -> AppResult<(StatusCode, Json<PlayerCreated>)> {
    let sex = body.validate().inspect_err(|e| {
        tracing::warn!(idade = body.idade, sexo = %body.sexo, "player rejected: {e}");
    })?;

    tracing::debug!(nome = %body.nome, ?sex, "player created");
    Ok((StatusCode::CREATED, Json(PlayerCreated::from(body))))
}
