use axum::{extract::Path, Json};
use rewind_core::{find_period, KeyPiece, RevivalPoint, StylePeriod, TimelineEvent};
use serde::Serialize;

use super::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PeriodDetail {
    #[serde(flatten)]
    period: &'static StylePeriod,
    full_description: &'static str,
    timeline: &'static [TimelineEvent],
    key_pieces: &'static [KeyPiece],
    revival: &'static [RevivalPoint],
    peak: Option<RevivalPoint>,
}

pub(super) async fn list_periods() -> Json<&'static [StylePeriod]> {
    Json(rewind_core::list_periods())
}

pub(super) async fn get_period(Path(decade): Path<String>) -> Result<Json<PeriodDetail>, ApiError> {
    let period = find_period(decade.trim()).ok_or_else(|| ApiError::not_found("unknown decade"))?;

    Ok(Json(PeriodDetail {
        period,
        full_description: period.full_description,
        timeline: period.timeline,
        key_pieces: period.key_pieces,
        revival: period.revival,
        peak: period.peak(),
    }))
}
