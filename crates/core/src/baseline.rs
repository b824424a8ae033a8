//! Baseline life-condition scores (grundförutsättningar).
//!
//! Five ordinal scores per participant, saved as a whole. Clients send the
//! scores either flat in the request body or nested under a
//! `grundforutsattningar` key, with either snake_case or Swedish display
//! names as keys. [`normalize_scores`] collapses all of those shapes into
//! one canonical struct so nothing downstream branches on input shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical baseline scores for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineScores {
    pub fysisk_halsa: i32,
    pub psykisk_halsa: i32,
    pub missbruk: i32,
    pub bostadssituation: i32,
    pub social_isolering: i32,
}

impl BaselineScores {
    /// All five domains at zero, returned when no row exists yet.
    pub fn zeroed() -> Self {
        Self {
            fysisk_halsa: 0,
            psykisk_halsa: 0,
            missbruk: 0,
            bostadssituation: 0,
            social_isolering: 0,
        }
    }
}

/// Accepted key aliases per domain: (snake_case, display name).
const DOMAIN_KEYS: &[(&str, &str, fn(&mut BaselineScores) -> &mut i32)] = &[
    ("fysisk_halsa", "Fysisk hälsa", |s| &mut s.fysisk_halsa),
    ("psykisk_halsa", "Psykisk hälsa", |s| &mut s.psykisk_halsa),
    ("missbruk", "Missbruk", |s| &mut s.missbruk),
    ("bostadssituation", "Bostadssituation", |s| {
        &mut s.bostadssituation
    }),
    ("social_isolering", "Social isolering", |s| {
        &mut s.social_isolering
    }),
];

/// Normalize a request body into [`BaselineScores`].
///
/// All five domains must be present as integers; the error names the first
/// missing domain using its display name.
pub fn normalize_scores(body: &Value) -> Result<BaselineScores, String> {
    // Unwrap an optional `grundforutsattningar` envelope.
    let obj = body
        .get("grundforutsattningar")
        .unwrap_or(body)
        .as_object()
        .ok_or_else(|| "Expected an object with the five baseline scores".to_string())?;

    let mut scores = BaselineScores::zeroed();
    for (snake, display, accessor) in DOMAIN_KEYS {
        let raw = obj.get(*snake).or_else(|| obj.get(*display));
        let value = raw
            .and_then(Value::as_i64)
            .ok_or_else(|| format!("Required baseline score '{display}' is missing"))?;
        *accessor(&mut scores) = i32::try_from(value)
            .map_err(|_| format!("Baseline score '{display}' is out of range"))?;
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_snake_case_body_normalized() {
        let body = json!({
            "fysisk_halsa": 3,
            "psykisk_halsa": 2,
            "missbruk": 0,
            "bostadssituation": 4,
            "social_isolering": 1
        });
        let scores = normalize_scores(&body).unwrap();
        assert_eq!(scores.fysisk_halsa, 3);
        assert_eq!(scores.social_isolering, 1);
    }

    #[test]
    fn nested_display_name_body_normalized() {
        let body = json!({
            "grundforutsattningar": {
                "Fysisk hälsa": 1,
                "Psykisk hälsa": 2,
                "Missbruk": 3,
                "Bostadssituation": 4,
                "Social isolering": 5
            }
        });
        let scores = normalize_scores(&body).unwrap();
        assert_eq!(
            scores,
            BaselineScores {
                fysisk_halsa: 1,
                psykisk_halsa: 2,
                missbruk: 3,
                bostadssituation: 4,
                social_isolering: 5
            }
        );
    }

    #[test]
    fn mixed_key_styles_accepted() {
        let body = json!({
            "fysisk_halsa": 1,
            "Psykisk hälsa": 2,
            "missbruk": 3,
            "Bostadssituation": 4,
            "social_isolering": 5
        });
        assert!(normalize_scores(&body).is_ok());
    }

    #[test]
    fn missing_domain_named_in_error() {
        let body = json!({
            "fysisk_halsa": 1,
            "psykisk_halsa": 2,
            "missbruk": 3,
            "bostadssituation": 4
        });
        let err = normalize_scores(&body).unwrap_err();
        assert!(err.contains("Social isolering"));
    }

    #[test]
    fn non_object_body_rejected() {
        assert!(normalize_scores(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn non_integer_score_rejected() {
        let body = json!({
            "fysisk_halsa": "hög",
            "psykisk_halsa": 2,
            "missbruk": 3,
            "bostadssituation": 4,
            "social_isolering": 5
        });
        let err = normalize_scores(&body).unwrap_err();
        assert!(err.contains("Fysisk hälsa"));
    }

    #[test]
    fn zeroed_defaults_are_all_zero() {
        let scores = BaselineScores::zeroed();
        assert_eq!(scores.fysisk_halsa, 0);
        assert_eq!(scores.psykisk_halsa, 0);
        assert_eq!(scores.missbruk, 0);
        assert_eq!(scores.bostadssituation, 0);
        assert_eq!(scores.social_isolering, 0);
    }
}
