//! Closed label sets for the product's category, facets and rent type.
//!
//! Each set serializes to its exact display label, so the stored and wire
//! representation is the label itself (`"Gift Box"`, `"Father's Day"`).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A string that is not a member of the label set it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown label `{0}`")]
pub struct UnknownLabel(pub String);

macro_rules! label_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownLabel(other.to_string())),
                }
            }
        }
    };
}

label_set! {
    /// Primary grouping bucket (`mainCategory`).
    MainCategory {
        Balloon => "Balloon",
        Card => "Card",
        GiftBox => "Gift Box",
        CakeTopper => "Cake Topper",
        DecorationItem => "Decoration Item",
        PhotoFrame => "Photo Frame",
        Mug => "Mug",
        Toy => "Toy",
        Other => "Other",
    }
}

label_set! {
    /// Occasion a product suits (`facets.events`).
    Occasion {
        Anniversary => "Anniversary",
        Birthday => "Birthday",
        BritishSouvenir => "British Souvenir",
        Christmas => "Christmas",
        Easter => "Easter",
        FathersDay => "Father's Day",
        MothersDay => "Mother's Day",
        Halloween => "Halloween",
        TeachersAndGraduation => "Teachers & Graduation",
        ValentinesDay => "Valentine's Day",
        Wedding => "Wedding",
        Other => "Other",
    }
}

label_set! {
    /// Who the gift is meant for (`facets.relation`).
    Recipient {
        Father => "Father",
        Mother => "Mother",
        Brother => "Brother",
        Sister => "Sister",
        Friend => "Friend",
        Grandfather => "Grandfather",
        Grandmother => "Grandmother",
        Husband => "Husband",
        Wife => "Wife",
        Other => "Other",
    }
}

label_set! {
    /// `facets.material`
    Material {
        Foil => "Foil",
        Latex => "Latex",
        Paper => "Paper",
        Plastic => "Plastic",
        Ceramic => "Ceramic",
        Wood => "Wood",
        Other => "Other",
    }
}

label_set! {
    /// `facets.size`
    Size {
        Small => "Small",
        Medium => "Medium",
        Large => "Large",
        ExtraLarge => "Extra Large",
    }
}

label_set! {
    /// Product variant (`facets.type`).
    ProductType {
        HeliumBalloon => "Helium Balloon",
        AirBalloon => "Air Balloon",
        PopUpCard => "Pop-up Card",
        MusicalCard => "Musical Card",
        LedGift => "LED Gift",
        Customizable => "Customizable",
        Combo => "Combo",
        Other => "Other",
    }
}

label_set! {
    /// Rental billing cadence. `None` means the product is sold outright.
    RentType {
        None => "none",
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

impl Default for RentType {
    fn default() -> Self {
        RentType::None
    }
}
