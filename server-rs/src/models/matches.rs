use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::check_player_id;
use crate::error::{AppError, AppResult};

pub const SITUATION_NEW: &str = "Nova";
pub const SITUATION_CLOSED: &str = "Encerrada";
pub const MEMBERSHIP_PENDING: &str = "Pendente";

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewMatch {
    pub local: String,
    /// ISO date, `YYYY-MM-DD`. Only presence is checked.
    #[schema(example = "2023-09-15")]
    pub data: String,
    pub categoria: String,
    pub tipo: String,
}

impl NewMatch {
    pub fn validate(&self) -> AppResult<()> {
        if self.local.is_empty() || self.data.is_empty() {
            return Err(AppError::Validation("Local e data são obrigatórios".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchCreated {
    pub id: i64,
    pub local: String,
    #[schema(example = "Nova")]
    pub situacao: String,
}

impl From<NewMatch> for MatchCreated {
    fn from(m: NewMatch) -> Self {
        Self {
            id: 10,
            local: m.local,
            situacao: SITUATION_NEW.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchClosed {
    pub id: i64,
    #[schema(example = "Encerrada")]
    pub situacao: String,
}

impl MatchClosed {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            situacao: SITUATION_CLOSED.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchSummary {
    pub id: i64,
    pub local: String,
    pub data: String,
}

/// `status` is required but not applied to the listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMatchesQuery {
    #[param(example = "Em_Adesao")]
    pub status: String,
}

/// Body for both joining and withdrawing from a match.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MembershipRequest {
    pub jogador_id: i64,
}

impl MembershipRequest {
    pub fn validate(&self) -> AppResult<()> {
        check_player_id(self.jogador_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn message(self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "Jogador aprovado",
            ApprovalStatus::Rejected => "Jogador rejeitado",
        }
    }
}

impl FromStr for ApprovalStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Approved" => Ok(ApprovalStatus::Approved),
            "Rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(AppError::Validation("Status inválido".into())),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MembershipApproval {
    /// `Approved` or `Rejected`.
    #[schema(example = "Approved")]
    pub status: String,
}

impl MembershipApproval {
    pub fn validate(&self) -> AppResult<ApprovalStatus> {
        self.status.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_match(local: &str, data: &str) -> NewMatch {
        NewMatch {
            local: local.into(),
            data: data.into(),
            categoria: "Misto".into(),
            tipo: "Amistoso".into(),
        }
    }

    #[test]
    fn match_requires_venue_and_date() {
        assert!(new_match("", "2023-09-15").validate().is_err());
        assert!(new_match("IFPI Quadra A", "").validate().is_err());
        assert!(new_match("", "").validate().is_err());
        assert!(new_match("IFPI Quadra A", "2023-09-15").validate().is_ok());
    }

    #[test]
    fn created_match_is_new() {
        let created = MatchCreated::from(new_match("IFPI Quadra A", "2023-09-15"));
        assert_eq!(created.id, 10);
        assert_eq!(created.local, "IFPI Quadra A");
        assert_eq!(created.situacao, "Nova");
    }

    #[test]
    fn membership_requires_positive_player_id() {
        assert!(MembershipRequest { jogador_id: 0 }.validate().is_err());
        assert!(MembershipRequest { jogador_id: -3 }.validate().is_err());
        assert!(MembershipRequest { jogador_id: 1 }.validate().is_ok());
    }

    #[test]
    fn approval_branches_on_status() {
        let approved = MembershipApproval { status: "Approved".into() }.validate().unwrap();
        assert_eq!(approved.message(), "Jogador aprovado");

        let rejected = MembershipApproval { status: "Rejected".into() }.validate().unwrap();
        assert_eq!(rejected.message(), "Jogador rejeitado");

        for raw in ["approved", "Pending", "Aprovado", ""] {
            let approval = MembershipApproval { status: raw.into() };
            assert!(approval.validate().is_err(), "{raw:?} should be rejected");
        }
    }
}
