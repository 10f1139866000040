use axum::{extract::Path, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::models::invitation::{Invitation, InvitationAccepted, InvitationAcceptance};
use crate::models::MessageBody;

/// The email was already checked by the decoder; nothing is sent.
#[utoipa::path(
    post,
    path = "/invitations",
    tag = "invitations",
    request_body = Invitation,
    responses(
        (status = 201, description = "Invitation recorded", body = MessageBody),
        (status = 422, description = "Malformed email or body", body = ErrorBody)
    )
)]
pub async fn send_invitation(
    WithRejection(Json(body), _): WithRejection<Json<Invitation>, AppError>,
) -> (StatusCode, Json<MessageBody>) {
    tracing::debug!(email = %body.email, responsavel_id = body.responsavel_id, "invitation sent");
    (StatusCode::CREATED, Json(MessageBody::new("Convite enviado")))
}

#[utoipa::path(
    post,
    path = "/invitations/{token}/accept",
    tag = "invitations",
    params(("token" = String, Path, description = "Opaque invitation token")),
    request_body = InvitationAcceptance,
    responses(
        (status = 201, description = "Guest registered", body = InvitationAccepted),
        (status = 400, description = "Unknown sex", body = ErrorBody)
    )
)]
pub async fn accept_invitation(
    WithRejection(Path(token), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<InvitationAcceptance>, AppError>,
) -> AppResult<(StatusCode, Json<InvitationAccepted>)> {
    let sex = body.validate().inspect_err(|e| {
        tracing::warn!(sexo = %body.sexo, "invitation acceptance rejected: {e}");
    })?;

    tracing::debug!(token = %token, nome = %body.nome, ?sex, "invitation accepted");
    Ok((StatusCode::CREATED, Json(InvitationAccepted::from(body))))
}
