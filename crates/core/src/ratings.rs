//! Assessment-series (ratings) dimensions and validation.
//!
//! Each rating snapshot carries nine ordinal scores. Rows are append-only;
//! trends are read via first/latest/all queries. All nine scores are
//! required together -- partial snapshots are rejected.

/// Lowest allowed score.
pub const MIN_SCORE: i32 = 0;

/// Highest allowed score.
pub const MAX_SCORE: i32 = 10;

/// The nine assessed dimensions, in storage order.
pub const DIMENSIONS: &[&str] = &[
    "hantering_av_vardagen",
    "halsa",
    "koncentrationsformaga",
    "tro_pa_att_fa_jobb",
    "stod_fran_natverk",
    "samarbetsformaga",
    "jobbsokningsbeteende",
    "kunskap_om_arbetsmarknaden",
    "malmedvetenhet",
];

/// Require a score to be present and within [0, 10].
///
/// Returns the validated value so callers can unwrap optional DTO fields
/// in one pass.
pub fn validate_score(dimension: &str, value: Option<i32>) -> Result<i32, String> {
    let score =
        value.ok_or_else(|| format!("Required rating score '{dimension}' is missing"))?;
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(format!(
            "Rating score '{dimension}' must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        ));
    }
    Ok(score)
}
