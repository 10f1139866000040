use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::check_score;
use crate::error::AppResult;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MatchRating {
    pub jogador_id: i64,
    #[schema(minimum = 1, maximum = 5)]
    pub nota: i64,
    #[serde(default)]
    pub comentario: Option<String>,
}

impl MatchRating {
    pub fn validate(&self) -> AppResult<()> {
        check_score(self.nota)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlayerRating {
    pub organizador_id: i64,
    pub jogador_id: i64,
    #[schema(minimum = 1, maximum = 5)]
    pub nota: i64,
}

impl PlayerRating {
    pub fn validate(&self) -> AppResult<()> {
        check_score(self.nota)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrganizerRank {
    pub organizador: String,
    pub media: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MAX_SCORE, MIN_SCORE};

    #[test]
    fn score_bounds_are_inclusive() {
        for nota in MIN_SCORE..=MAX_SCORE {
            let rating = MatchRating { jogador_id: 4, nota, comentario: None };
            assert!(rating.validate().is_ok(), "nota {nota} should pass");
        }
        for nota in [i64::MIN, -1, 0, 6, 100] {
            let rating = PlayerRating { organizador_id: 1, jogador_id: 4, nota };
            assert!(rating.validate().is_err(), "nota {nota} should fail");
        }
    }

    #[test]
    fn comment_is_optional() {
        let rating: MatchRating =
            serde_json::from_str(r#"{"jogador_id": 4, "nota": 5}"#).unwrap();
        assert!(rating.comentario.is_none());
    }
}
