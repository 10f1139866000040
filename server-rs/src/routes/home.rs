use axum::Json;

use crate::models::MessageBody;

#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses((status = 200, description = "Service is up", body = MessageBody))
)]
pub async fn home() -> Json<MessageBody> {
    Json(MessageBody::new("API Galera do Vôlei rodando!"))
}
