use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson::{self, Bson};
use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

/// Stores `dateOfSale` as a native BSON DateTime so `$month` can be applied
/// to it server-side.
pub fn serialize_datetime<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let bson_dt = Bson::DateTime(bson::DateTime::from_millis(dt.timestamp_millis()));
    bson_dt.serialize(serializer)
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let bson = Bson::deserialize(deserializer)?;
    match bson {
        Bson::DateTime(dt) => Utc
            .timestamp_millis_opt(dt.timestamp_millis())
            .single()
            .ok_or_else(|| serde::de::Error::custom("DateTime out of range")),
        Bson::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom),
        _ => Err(serde::de::Error::custom("expecting DateTime")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Wrapper {
        #[serde(
            serialize_with = "serialize_datetime",
            deserialize_with = "deserialize_datetime"
        )]
        at: DateTime<Utc>,
    }

    #[test]
    fn writes_native_bson_datetime() {
        let at = Utc.with_ymd_and_hms(2022, 1, 5, 10, 0, 0).unwrap();
        let document = to_document(&Wrapper { at }).unwrap();

        assert_eq!(
            document.get("at"),
            Some(&Bson::DateTime(bson::DateTime::from_millis(
                at.timestamp_millis()
            )))
        );
        assert_eq!(from_document::<Wrapper>(document).unwrap(), Wrapper { at });
    }

    #[test]
    fn accepts_legacy_string_dates() {
        let document = doc! { "at": "2021-11-27T20:29:54+05:30" };

        let wrapper: Wrapper = from_document(document).unwrap();

        assert_eq!(
            wrapper.at,
            Utc.with_ymd_and_hms(2021, 11, 27, 14, 59, 54).unwrap()
        );
    }
}
