use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::RecordDate;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Locality {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "CP", default)]
    pub postal_code: Option<String>,
}

/// Postal address split the way the address form captures it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// Street type ("Calle", "Avenida", ...).
    #[serde(rename = "tipo_via", default)]
    pub street_type: String,
    #[serde(rename = "nombre", default)]
    pub street_name: String,
    #[serde(rename = "localidad", default)]
    pub locality: Option<Locality>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    pub id: Uuid,
    pub created_at: RecordDate,
    #[serde(rename = "nombre", default)]
    pub first_name: String,
    #[serde(rename = "apellidos", default)]
    pub last_name: String,
    /// Tax identifier.
    #[serde(rename = "dni", default)]
    pub tax_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<Address>,
}

impl Customer {
    pub fn street_type(&self) -> &str {
        self.address.as_ref().map_or("", |a| a.street_type.as_str())
    }

    pub fn street_name(&self) -> &str {
        self.address.as_ref().map_or("", |a| a.street_name.as_str())
    }

    fn locality(&self) -> Option<&Locality> {
        self.address.as_ref().and_then(|a| a.locality.as_ref())
    }

    pub fn locality_name(&self) -> &str {
        self.locality().map_or("", |l| l.name.as_str())
    }

    pub fn postal_code(&self) -> &str {
        self.locality()
            .and_then(|l| l.postal_code.as_deref())
            .unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }
}
