use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::models::matches::*;
use crate::models::rating::{MatchRating, PlayerRating};
use crate::models::MessageBody;

#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = NewMatch,
    responses(
        (status = 201, description = "Match created", body = MatchCreated),
        (status = 400, description = "Venue or date missing", body = ErrorBody)
    )
)]
pub async fn create_match(
    WithRejection(Json(body), _): WithRejection<Json<NewMatch>, AppError>,
) -> AppResult<(StatusCode, Json<MatchCreated>)> {
    body.validate()
        .inspect_err(|e| tracing::warn!("match rejected: {e}"))?;

    tracing::debug!(local = %body.local, data = %body.data, tipo = %body.tipo, "match created");
    Ok((StatusCode::CREATED, Json(MatchCreated::from(body))))
}

#[utoipa::path(
    get,
    path = "/matches",
    tag = "matches",
    params(ListMatchesQuery),
    responses(
        (status = 200, description = "Match summaries", body = [MatchSummary]),
        (status = 400, description = "Missing status filter", body = ErrorBody)
    )
)]
pub async fn list_matches(
    WithRejection(Query(q), _): WithRejection<Query<ListMatchesQuery>, AppError>,
) -> Json<Vec<MatchSummary>> {
    // The filter is accepted but there is nothing to apply it to.
    tracing::debug!(status = %q.status, "listing matches");
    Json(vec![MatchSummary {
        id: 10,
        local: "IFPI Quadra A".to_string(),
        data: "2023-09-15".to_string(),
    }])
}

#[utoipa::path(
    post,
    path = "/matches/{id}/membership",
    tag = "matches",
    params(("id" = i64, Path, description = "Match id")),
    request_body = MembershipRequest,
    responses(
        (status = 200, description = "Request pending", body = MessageBody),
        (status = 400, description = "Invalid player id", body = ErrorBody)
    )
)]
pub async fn request_membership(
    WithRejection(Path(match_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<MembershipRequest>, AppError>,
) -> AppResult<Json<MessageBody>> {
    body.validate().inspect_err(|e| {
        tracing::warn!(match_id, jogador_id = body.jogador_id, "membership rejected: {e}");
    })?;

    tracing::debug!(match_id, jogador_id = body.jogador_id, "membership requested");
    Ok(Json(
        MessageBody::new("Pedido enviado").with_status(MEMBERSHIP_PENDING),
    ))
}

#[utoipa::path(
    put,
    path = "/matches/{id}/membership/{player_id}",
    tag = "matches",
    params(
        ("id" = i64, Path, description = "Match id"),
        ("player_id" = i64, Path, description = "Player under review")
    ),
    request_body = MembershipApproval,
    responses(
        (status = 200, description = "Approval or rejection message", body = MessageBody),
        (status = 400, description = "Status is not Approved or Rejected", body = ErrorBody)
    )
)]
pub async fn review_membership(
    WithRejection(Path((match_id, player_id)), _): WithRejection<Path<(i64, i64)>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<MembershipApproval>, AppError>,
) -> AppResult<Json<MessageBody>> {
    let status = body.validate().inspect_err(|e| {
        tracing::warn!(match_id, player_id, status = %body.status, "approval rejected: {e}");
    })?;

    tracing::debug!(match_id, player_id, ?status, "membership reviewed");
    Ok(Json(MessageBody::new(status.message())))
}

#[utoipa::path(
    delete,
    path = "/matches/{id}/withdrawal",
    tag = "matches",
    params(("id" = i64, Path, description = "Match id")),
    request_body = MembershipRequest,
    responses(
        (status = 200, description = "Player withdrawn", body = MessageBody),
        (status = 400, description = "Invalid player id", body = ErrorBody)
    )
)]
pub async fn withdraw(
    WithRejection(Path(match_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<MembershipRequest>, AppError>,
) -> AppResult<Json<MessageBody>> {
    body.validate().inspect_err(|e| {
        tracing::warn!(match_id, jogador_id = body.jogador_id, "withdrawal rejected: {e}");
    })?;

    tracing::debug!(match_id, jogador_id = body.jogador_id, "player withdrew");
    Ok(Json(MessageBody::new("Jogador retirado da partida")))
}

/// Closing never looks the match up, so any id closes.
#[utoipa::path(
    put,
    path = "/matches/{id}/close",
    tag = "matches",
    params(("id" = i64, Path, description = "Match id")),
    responses(
        (status = 200, description = "Match closed", body = MatchClosed),
        (status = 400, description = "Id is not an integer", body = ErrorBody)
    )
)]
pub async fn close_match(
    WithRejection(Path(match_id), _): WithRejection<Path<i64>, AppError>,
) -> Json<MatchClosed> {
    tracing::debug!(match_id, "match closed");
    Json(MatchClosed::new(match_id))
}

#[utoipa::path(
    post,
    path = "/matches/{id}/rating",
    tag = "matches",
    params(("id" = i64, Path, description = "Match id")),
    request_body = MatchRating,
    responses(
        (status = 200, description = "Rating recorded", body = MessageBody),
        (status = 400, description = "Score outside 1..=5", body = ErrorBody)
    )
)]
pub async fn rate_match(
    WithRejection(Path(match_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<MatchRating>, AppError>,
) -> AppResult<Json<MessageBody>> {
    body.validate().inspect_err(|e| {
        tracing::warn!(match_id, nota = body.nota, "match rating rejected: {e}");
    })?;

    tracing::debug!(
        match_id,
        jogador_id = body.jogador_id,
        nota = body.nota,
        has_comment = body.comentario.is_some(),
        "match rated"
    );
    Ok(Json(MessageBody::new("Avaliação registrada")))
}

#[utoipa::path(
    post,
    path = "/matches/{id}/player_rating",
    tag = "matches",
    params(("id" = i64, Path, description = "Match id")),
    request_body = PlayerRating,
    responses(
        (status = 200, description = "Rating recorded", body = MessageBody),
        (status = 400, description = "Score outside 1..=5", body = ErrorBody)
    )
)]
pub async fn rate_player(
    WithRejection(Path(match_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<PlayerRating>, AppError>,
) -> AppResult<Json<MessageBody>> {
    body.validate().inspect_err(|e| {
        tracing::warn!(match_id, nota = body.nota, "player rating rejected: {e}");
    })?;

    tracing::debug!(
        match_id,
        organizador_id = body.organizador_id,
        jogador_id = body.jogador_id,
        nota = body.nota,
        "player rated"
    );
    Ok(Json(MessageBody::new("Avaliação registrada")))
}
