use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::models::{invitation, matches, player, rating, MessageBody};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Galera do Vôlei API",
        version = "1.0.0",
        description = "API para organização de partidas e comunidade Galera do Vôlei"
    ),
    paths(
        routes::home::home,
        routes::health::health,
        routes::players::create_player,
        routes::matches::create_match,
        routes::matches::list_matches,
        routes::matches::request_membership,
        routes::matches::review_membership,
        routes::matches::withdraw,
        routes::matches::close_match,
        routes::matches::rate_match,
        routes::matches::rate_player,
        routes::rankings::organizer_ranking,
        routes::invitations::send_invitation,
        routes::invitations::accept_invitation
    ),
    components(schemas(
        ErrorBody,
        MessageBody,
        player::NewPlayer,
        player::PlayerCreated,
        matches::NewMatch,
        matches::MatchCreated,
        matches::MatchClosed,
        matches::MatchSummary,
        matches::MembershipRequest,
        matches::MembershipApproval,
        rating::MatchRating,
        rating::PlayerRating,
        rating::OrganizerRank,
        invitation::Invitation,
        invitation::InvitationAcceptance,
        invitation::InvitationAccepted
    )),
    tags(
        (name = "home", description = "Liveness"),
        (name = "players", description = "Player registration"),
        (name = "matches", description = "Matches, membership and ratings"),
        (name = "rankings", description = "Organizer ranking"),
        (name = "invitations", description = "Community invitations")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Galera do Vôlei API");
        assert_eq!(doc.info.version, "1.0.0");

        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/",
            "/health",
            "/players",
            "/matches",
            "/matches/{id}/membership",
            "/matches/{id}/membership/{player_id}",
            "/matches/{id}/withdrawal",
            "/matches/{id}/close",
            "/matches/{id}/rating",
            "/matches/{id}/player_rating",
            "/rankings/organizers",
            "/invitations",
            "/invitations/{token}/accept",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
