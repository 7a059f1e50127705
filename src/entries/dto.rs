use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub user_id: Uuid,
    pub calories: i32,
    /// Today when omitted.
    #[serde(default, deserialize_with = "crate::dates::optional_date")]
    pub log_date: Option<Date>,
}

/// Query string of `GET /entries`.
#[derive(Debug, Deserialize)]
pub struct ListEntriesParams {
    pub user_id: Uuid,
    #[serde(default, deserialize_with = "crate::dates::optional_date")]
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "crate::dates::optional_date")]
    pub end_date: Option<Date>,
}
