use product_catalog::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    models::{Category, NewProduct},
    repository::{PgProductRepository, ProductRepository},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let database_url = config
        .database_url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed products"))?;

    let orm = create_orm_conn(&database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let repo = PgProductRepository::new(orm);

    let mut created = 0;
    for input in demo_products() {
        if !repo.find_by_name(&input.name).await?.is_empty() {
            continue;
        }
        repo.create(input).await?;
        created += 1;
    }

    println!("Seed completed. {created} products created");
    Ok(())
}

fn demo_products() -> Vec<NewProduct> {
    [
        ("Hat", "A red fedora", 59.95, true, Category::Cloths),
        ("Shoes", "Blue shoes", 120.50, false, Category::Cloths),
        ("Big Mac", "1/4 lb burger", 5.99, true, Category::Food),
        ("Sheets", "Full bed sheets", 87.00, true, Category::Housewares),
        ("Wrench", "Adjustable wrench", 14.25, true, Category::Tools),
        ("Wiper Blades", "Pair of wiper blades", 22.40, false, Category::Automotive),
    ]
    .into_iter()
    .map(|(name, description, price, available, category)| NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price,
        available,
        category,
    })
    .collect()
}
