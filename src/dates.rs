//! `YYYY-MM-DD` calendar dates on the wire.

use serde::de::{value::StrDeserializer, IntoDeserializer};
use serde::{Deserialize, Deserializer};
use time::Date;

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Optional request date. Missing, `null` and blank all mean "not given",
/// which callers resolve to today.
///
/// `#[serde(default, deserialize_with = "crate::dates::optional_date")]`
pub fn optional_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Date>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(d)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let inner: StrDeserializer<'_, D::Error> = raw.into_deserializer();
    iso_date::deserialize(inner).map(Some)
}
