use std::fmt;

use crate::types::dto::geocoding::LatLng;

/// A landmark resolved to a postal address and coordinates.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub address: String,
    pub postal_code: Option<String>,
    pub location: LatLng,
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)?;
        if let Some(code) = &self.postal_code {
            write!(f, "（郵遞區號：{code}）")?;
        }
        Ok(())
    }
}
