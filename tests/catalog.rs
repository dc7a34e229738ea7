use gift_catalog::catalog::{
    MainCategory, Material, Occasion, ProductType, Recipient, RentType, Size, UnknownLabel,
};

#[test]
fn label_sets_are_closed_at_their_documented_sizes() {
    assert_eq!(MainCategory::ALL.len(), 9);
    assert_eq!(Occasion::ALL.len(), 12);
    assert_eq!(Recipient::ALL.len(), 10);
    assert_eq!(Material::ALL.len(), 7);
    assert_eq!(Size::ALL.len(), 4);
    assert_eq!(ProductType::ALL.len(), 8);
    assert_eq!(RentType::ALL.len(), 4);
}

#[test]
fn labels_with_punctuation_parse_exactly() {
    assert_eq!("Father's Day".parse::<Occasion>(), Ok(Occasion::FathersDay));
    assert_eq!(
        "Teachers & Graduation".parse::<Occasion>(),
        Ok(Occasion::TeachersAndGraduation)
    );
    assert_eq!("Pop-up Card".parse::<ProductType>(), Ok(ProductType::PopUpCard));
    assert_eq!(
        "Fathers Day".parse::<Occasion>(),
        Err(UnknownLabel("Fathers Day".into()))
    );
}

#[test]
fn serde_uses_the_display_label() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&MainCategory::CakeTopper)?, "\"Cake Topper\"");
    assert_eq!(serde_json::from_str::<Size>("\"Extra Large\"")?, Size::ExtraLarge);
    assert_eq!(RentType::default().to_string(), "none");
    Ok(())
}
