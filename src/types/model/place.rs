use serde::{Serialize, Serializer};

/// One row of the exported report. Field labels match the operator-facing
/// output of the tool, so they serialize in Traditional Chinese.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    #[serde(rename = "商店名稱")]
    pub name: String,
    #[serde(rename = "地址")]
    pub address: Option<String>,
    #[serde(rename = "評分")]
    pub rating: Rating,
}

/// A place rating; the provider omits it for unrated places, which the
/// report renders as the literal "N/A".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    NotAvailable,
}

impl From<Option<f64>> for Rating {
    fn from(rating: Option<f64>) -> Self {
        rating.map_or(Self::NotAvailable, Self::Score)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Score(score) => serializer.serialize_f64(*score),
            Self::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}
