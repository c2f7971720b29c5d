//! Closed option sets used by the select and checkbox inputs.

use agrisite_core::DomainError;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => ($id:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value sent over the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| DomainError::validation(format!("unknown {} '{}'", $what, s)))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

choice_enum! {
    /// Contact form subject.
    Subject, "subject" {
        General => ("general", "General Inquiry"),
        Product => ("product", "Product Information"),
        Technical => ("technical", "Technical Support"),
        Bulk => ("bulk", "Bulk Orders"),
        Soil => ("soil", "Soil Testing"),
        Consultation => ("consultation", "Agro Consultancy"),
    }
}

choice_enum! {
    BusinessType, "business type" {
        Retailer => ("retailer", "Agricultural Retailer"),
        Cooperative => ("cooperative", "Farm Cooperative"),
        Farm => ("farm", "Large Scale Farm"),
        Distributor => ("distributor", "Agricultural Distributor"),
        Other => ("other", "Other"),
    }
}

choice_enum! {
    /// Estimated monthly purchase volume, in rupees.
    MonthlyVolume, "monthly volume" {
        From50kTo100k => ("50k-100k", "₹50,000 - ₹1,00,000"),
        From100kTo250k => ("100k-250k", "₹1,00,000 - ₹2,50,000"),
        From250kTo500k => ("250k-500k", "₹2,50,000 - ₹5,00,000"),
        From500kTo1000k => ("500k-1000k", "₹5,00,000 - ₹10,00,000"),
        Above1000k => ("1000k+", "Above ₹10,00,000"),
    }
}

choice_enum! {
    /// Wholesaler "primary products of interest" checkboxes.
    ProductInterest, "product interest" {
        OrganicFertilizers => ("Organic Fertilizers", "Organic Fertilizers"),
        ChemicalFertilizers => ("Chemical Fertilizers", "Chemical Fertilizers"),
        Pesticides => ("Pesticides", "Pesticides"),
        Seeds => ("Seeds", "Seeds"),
        SoilConditioners => ("Soil Conditioners", "Soil Conditioners"),
        FarmEquipment => ("Farm Equipment", "Farm Equipment"),
    }
}

/// Serde adapter for optional selects: an unselected input travels as `""`.
pub(crate) mod blank_as_none {
    use core::fmt::Display;
    use core::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(de::Error::custom)
    }
}

/// Parse an optional select value from raw input (`""` clears it).
pub(crate) fn parse_optional<T>(value: &str) -> Result<Option<T>, DomainError>
where
    T: core::str::FromStr<Err = DomainError>,
{
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}
