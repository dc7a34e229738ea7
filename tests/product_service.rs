mod common;

use chrono::Utc;
use common::{OWNER, minimal_input};
use gift_catalog::{
    catalog::{MainCategory, Occasion, Recipient, RentType},
    dto::products::{FacetsInput, OneOrMany, ProductInput},
    entity::products::Model as ProductModel,
    error::AppError,
    models::Facets,
    services::product_service::{
        create_product, delete_product, find_owned_by_title, get_product, prepare_update,
        product_from_entity, update_product,
    },
    state::AppState,
};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

fn stored(id: Uuid) -> ProductModel {
    let now: DateTimeWithTimeZone = Utc::now().into();
    ProductModel {
        id,
        title: "Foil Balloon".into(),
        description: "A shiny balloon".into(),
        main_category: "Balloon".into(),
        facets: Facets {
            events: vec![Occasion::Birthday],
            ..Default::default()
        },
        price: 10.0,
        image_urls: vec!["http://x/img.png".into()],
        stock: 0,
        is_available: true,
        rating: 0.0,
        owner_id: Uuid::parse_str(OWNER).expect("owner id"),
        rent_type: "none".into(),
        created_at: now,
        updated_at: now,
    }
}

fn state(orm: DatabaseConnection) -> AppState {
    AppState { orm }
}

#[tokio::test]
async fn create_persists_a_valid_record() -> anyhow::Result<()> {
    let id = Uuid::new_v4();
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored(id)]])
        .into_connection();
    let state = state(orm);

    let mut input = minimal_input();
    input.facets = Some(FacetsInput {
        events: Some(OneOrMany::One("Birthday".into())),
        ..Default::default()
    });
    let product = create_product(&state, input).await?;

    assert_eq!(product.id, id);
    assert_eq!(product.main_category, MainCategory::Balloon);
    assert_eq!(product.facets.events, vec![Occasion::Birthday]);
    assert_eq!(product.rent_type, RentType::None);
    assert_eq!(state.orm.into_transaction_log().len(), 1);
    Ok(())
}

#[tokio::test]
async fn create_rejects_before_touching_the_database() -> anyhow::Result<()> {
    let orm = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let state = state(orm);

    let mut input = minimal_input();
    input.price = Some(-1.0);
    let err = create_product(&state, input)
        .await
        .expect_err("negative price must be rejected");

    let validation = err.validation().expect("validation error");
    assert_eq!(validation.message_for("price"), Some("Price cannot be negative"));
    assert!(state.orm.into_transaction_log().is_empty());
    Ok(())
}

#[tokio::test]
async fn update_to_weekly_rent_succeeds() -> anyhow::Result<()> {
    let id = Uuid::new_v4();
    let mut updated = stored(id);
    updated.rent_type = "weekly".into();
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored(id)], vec![updated]])
        .into_connection();
    let state = state(orm);

    let patch = ProductInput {
        rent_type: Some("weekly".into()),
        ..Default::default()
    };
    let product = update_product(&state, id, patch).await?;

    assert_eq!(product.rent_type, RentType::Weekly);
    let log = format!("{:?}", state.orm.into_transaction_log());
    assert!(log.contains("FOR UPDATE"), "update must lock the row: {log}");
    Ok(())
}

#[tokio::test]
async fn update_to_unknown_rent_type_fails_validation() -> anyhow::Result<()> {
    let id = Uuid::new_v4();
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored(id)]])
        .into_connection();
    let state = state(orm);

    let patch = ProductInput {
        rent_type: Some("yearly".into()),
        ..Default::default()
    };
    let err = update_product(&state, id, patch)
        .await
        .expect_err("yearly is not a rent type");

    assert_eq!(
        err.validation().and_then(|v| v.message_for("rentType")),
        Some("`yearly` is not a valid enum value for path `rentType`.")
    );
    let log = format!("{:?}", state.orm.into_transaction_log());
    assert!(!log.contains(" SET "), "nothing may be written: {log}");
    Ok(())
}

#[tokio::test]
async fn update_revalidates_the_merged_record() -> anyhow::Result<()> {
    let id = Uuid::new_v4();
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored(id)]])
        .into_connection();
    let state = state(orm);

    let patch = ProductInput {
        title: Some("   ".into()),
        stock: Some(-3),
        ..Default::default()
    };
    let err = update_product(&state, id, patch).await.expect_err("invalid patch");
    let validation = err.validation().expect("validation error");

    let paths: Vec<&str> = validation.errors().iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["title", "stock"]);
    Ok(())
}

#[tokio::test]
async fn missing_product_is_not_found() -> anyhow::Result<()> {
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<ProductModel>::new(), Vec::<ProductModel>::new()])
        .into_connection();
    let state = state(orm);

    let err = get_product(&state, Uuid::new_v4()).await.expect_err("absent");
    assert!(matches!(err, AppError::NotFound));

    let err = update_product(&state, Uuid::new_v4(), ProductInput::default())
        .await
        .expect_err("absent");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn delete_reports_missing_rows() -> anyhow::Result<()> {
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let state = state(orm);

    delete_product(&state, Uuid::new_v4()).await?;
    let err = delete_product(&state, Uuid::new_v4())
        .await
        .expect_err("second delete finds nothing");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn owned_title_lookup_finds_existing_rows() -> anyhow::Result<()> {
    let id = Uuid::new_v4();
    let owner = Uuid::parse_str(OWNER)?;
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored(id)], Vec::<ProductModel>::new()])
        .into_connection();
    let state = state(orm);

    let found = find_owned_by_title(&state, owner, "Foil Balloon").await?;
    assert_eq!(found.map(|p| p.id), Some(id));

    let missing = find_owned_by_title(&state, owner, "Paper Crown").await?;
    assert!(missing.is_none());

    assert_eq!(state.orm.into_transaction_log().len(), 2);
    Ok(())
}

#[test]
fn null_in_a_patch_clears_an_optional_facet() {
    let mut model = stored(Uuid::new_v4());
    model.facets.relation = Some(Recipient::Mother);
    model.facets.color = Some("red".into());
    let current = product_from_entity(model).expect("stored row");

    let patch: ProductInput =
        serde_json::from_value(serde_json::json!({ "facets": { "relation": null } }))
            .expect("patch json");
    let draft = prepare_update(&current, patch).expect("valid merge");

    assert_eq!(draft.facets.relation, None);
    assert_eq!(draft.facets.color.as_deref(), Some("red"));
    assert_eq!(draft.facets.events, vec![Occasion::Birthday]);
}

#[test]
fn stored_row_with_unknown_label_is_an_internal_error() {
    let mut model = stored(Uuid::new_v4());
    model.main_category = "Sticker".into();
    let err = product_from_entity(model).expect_err("unknown label");
    assert!(matches!(err, AppError::Internal(_)));
}
