use gift_catalog::{
    config::AppConfig,
    db::{connect, run_migrations},
    dto::products::{FacetsInput, OneOrMany, ProductInput},
    entity::users::{ActiveModel as UserActive, Column as UserColumn, Entity as Users},
    services::product_service::{create_product, find_owned_by_title},
    state::AppState,
    telemetry::init_tracing,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;

    let orm = connect(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    let owner_id = ensure_owner(&state, "shop@example.com").await?;
    seed_products(&state, owner_id).await?;

    tracing::info!(%owner_id, "seed completed");
    Ok(())
}

async fn ensure_owner(state: &AppState, email: &str) -> anyhow::Result<Uuid> {
    let existing = Users::find()
        .filter(UserColumn::Email.eq(email))
        .one(&state.orm)
        .await?;
    if let Some(user) = existing {
        return Ok(user.id);
    }

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        created_at: Set(chrono::Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(email, "created owner");
    Ok(user.id)
}

async fn seed_products(state: &AppState, owner_id: Uuid) -> anyhow::Result<()> {
    let products = vec![
        (
            "Happy Birthday Foil Balloon",
            "Gold helium balloon, 45cm",
            "Balloon",
            OneOrMany::One("Birthday".to_string()),
            Some("Foil"),
            Some("Helium Balloon"),
            4.99,
        ),
        (
            "Ferris Mug",
            "Ceramic mug for the Rustacean dad",
            "Mug",
            OneOrMany::Many(vec!["Father's Day".to_string(), "Birthday".to_string()]),
            Some("Ceramic"),
            None,
            12.5,
        ),
        (
            "Pop-up Rose Card",
            "Hand-folded card with a paper rose",
            "Card",
            OneOrMany::One("Valentine's Day".to_string()),
            Some("Paper"),
            Some("Pop-up Card"),
            6.0,
        ),
    ];

    for (title, description, category, events, material, kind, price) in products {
        if find_owned_by_title(state, owner_id, title).await?.is_some() {
            tracing::debug!(title, "product already seeded");
            continue;
        }
        let input = ProductInput {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            main_category: Some(category.to_string()),
            facets: Some(FacetsInput {
                events: Some(events),
                material: material.and_then(FacetsInput::set),
                kind: kind.and_then(FacetsInput::set),
                ..Default::default()
            }),
            price: Some(price),
            image_urls: Some(vec![format!(
                "https://cdn.example.com/products/{}.png",
                title.to_lowercase().replace(' ', "-")
            )]),
            stock: Some(25),
            owner: Some(owner_id.to_string()),
            ..Default::default()
        };
        let product = create_product(state, input).await?;
        tracing::info!(product_id = %product.id, title, "seeded product");
    }

    Ok(())
}
