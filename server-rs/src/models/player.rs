use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MIN_PLAYER_AGE;
use crate::error::{AppError, AppResult};

/// Accepted spellings are `Male`, `Female`, `M` and `F`, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" | "M" => Ok(Sex::Male),
            "Female" | "F" => Ok(Sex::Female),
            _ => Err(AppError::Validation("Sexo inválido".into())),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewPlayer {
    pub nome: String,
    /// One of `Male`, `Female`, `M`, `F`.
    #[schema(example = "F")]
    pub sexo: String,
    #[schema(minimum = 10)]
    pub idade: i64,
    pub categoria: String,
}

impl NewPlayer {
    pub fn validate(&self) -> AppResult<Sex> {
        if self.idade < MIN_PLAYER_AGE {
            return Err(AppError::Validation(
                "Jogador deve ter no mínimo 10 anos".into(),
            ));
        }
        self.sexo.parse()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerCreated {
    pub id: i64,
    pub nome: String,
    pub sexo: String,
    pub categoria: String,
}

impl From<NewPlayer> for PlayerCreated {
    fn from(p: NewPlayer) -> Self {
        Self {
            id: 1,
            nome: p.nome,
            sexo: p.sexo,
            categoria: p.categoria,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(sexo: &str, idade: i64) -> NewPlayer {
        NewPlayer {
            nome: "Ana".into(),
            sexo: sexo.into(),
            idade,
            categoria: "Intermediário".into(),
        }
    }

    #[test]
    fn sex_accepts_full_and_abbreviated_forms() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("M".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
    }

    #[test]
    fn sex_rejects_anything_else() {
        for raw in ["", "m", "f", "male", "X", "Masculino", " F"] {
            assert!(raw.parse::<Sex>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn age_below_ten_fails_first() {
        // Age is checked before sex, so the detail names the age rule.
        let err = player("invalid", 9).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("10 anos")));

        assert!(player("F", 10).validate().is_ok());
        assert!(player("F", -1).validate().is_err());
    }

    #[test]
    fn created_echoes_input() {
        let created = PlayerCreated::from(player("F", 15));
        assert_eq!(created.id, 1);
        assert_eq!(created.nome, "Ana");
        assert_eq!(created.sexo, "F");
        assert_eq!(created.categoria, "Intermediário");
    }
}
