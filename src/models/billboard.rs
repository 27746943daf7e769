use serde::Serialize;
use sqlx::FromRow;

use crate::utils::serialize_duration;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BillboardEntry {
    pub rank: i32,
    pub last_week: Option<i32>,
    pub weeks_on_chart: i32,
    pub song_id: i32,
    pub title: String,
    pub artist: String,
    pub genre: Option<String>,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: i32,
}
