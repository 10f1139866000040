use axum::Json;

use crate::models::rating::OrganizerRank;

#[utoipa::path(
    get,
    path = "/rankings/organizers",
    tag = "rankings",
    responses((status = 200, description = "Organizers by average rating", body = [OrganizerRank]))
)]
pub async fn organizer_ranking() -> Json<Vec<OrganizerRank>> {
    Json(vec![OrganizerRank {
        organizador: "Carlos".to_string(),
        media: 4.7,
    }])
}
