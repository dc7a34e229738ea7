#![allow(dead_code)]

use gift_catalog::dto::products::ProductInput;

pub const OWNER: &str = "7f1c1f52-5a0e-4b8f-9a53-1d2f3c4b5a69";

/// Smallest record that passes validation.
pub fn minimal_input() -> ProductInput {
    ProductInput {
        title: Some("Foil Balloon".into()),
        description: Some("A shiny balloon".into()),
        main_category: Some("Balloon".into()),
        price: Some(10.0),
        image_urls: Some(vec!["http://x/img.png".into()]),
        owner: Some(OWNER.into()),
        ..Default::default()
    }
}
