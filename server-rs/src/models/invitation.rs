use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::player::Sex;
use crate::error::AppResult;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^[^@\s]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
        )
        .expect("email pattern is valid")
    })
}

/// An email address that passed structural validation while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if email_pattern().is_match(&value) {
            Ok(Email(value))
        } else {
            Err(format!("value is not a valid email address: {value:?}"))
        }
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct Invitation {
    #[schema(value_type = String, example = "ana@galera.com")]
    pub email: Email,
    pub responsavel_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InvitationAcceptance {
    pub nome: String,
    pub sexo: String,
}

impl InvitationAcceptance {
    pub fn validate(&self) -> AppResult<Sex> {
        self.sexo.parse()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvitationAccepted {
    pub id: i64,
    pub nome: String,
    pub responsavel_id: i64,
}

impl From<InvitationAcceptance> for InvitationAccepted {
    fn from(a: InvitationAcceptance) -> Self {
        Self {
            id: 7,
            nome: a.nome,
            responsavel_id: 3,
        }
    }
}
