pub mod invitation;
pub mod matches;
pub mod player;
pub mod rating;

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const MIN_PLAYER_AGE: i64 = 10;
pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 5;

/// Plain confirmation body; `status` is only set for membership requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Avaliação registrada")]
    pub mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl MessageBody {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

pub(crate) fn check_player_id(player_id: i64) -> AppResult<()> {
    if player_id <= 0 {
        return Err(AppError::Validation("ID do jogador inválido".into()));
    }
    Ok(())
}

pub(crate) fn check_score(score: i64) -> AppResult<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::Validation("Nota deve ser entre 1 e 5".into()));
    }
    Ok(())
}
