use anyhow::anyhow;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Select, Set,
};

use crate::{
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::{Category, NewProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL-backed repository built on sea-orm.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    orm: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    async fn fetch(&self, finder: Select<Products>) -> AppResult<Vec<Product>> {
        finder
            .order_by_asc(Column::Id)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect()
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: NewProduct) -> AppResult<Product> {
        let active = ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            available: Set(input.available),
            category: Set(input.category.to_string()),
        };
        let model = active.insert(&self.orm).await?;

        tracing::debug!(product_id = model.id, "inserted product row");
        product_from_entity(model)
    }

    async fn find(&self, id: i32) -> AppResult<Option<Product>> {
        Products::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(product_from_entity)
            .transpose()
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let existing = Products::find_by_id(product.id)
            .one(&self.orm)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Product with id '{}' was not found.", product.id))
            })?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(product.name);
        active.description = Set(product.description);
        active.price = Set(product.price);
        active.available = Set(product.available);
        active.category = Set(product.category.to_string());

        let model = active.update(&self.orm).await?;
        product_from_entity(model)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Products::delete_by_id(id).exec(&self.orm).await?;
        tracing::debug!(product_id = id, rows = result.rows_affected, "deleted product rows");
        Ok(())
    }

    async fn all(&self) -> AppResult<Vec<Product>> {
        self.fetch(Products::find()).await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        self.fetch(Products::find().filter(Column::Name.eq(name)))
            .await
    }

    async fn find_by_category(&self, category: Category) -> AppResult<Vec<Product>> {
        self.fetch(Products::find().filter(Column::Category.eq(category.as_str())))
            .await
    }

    async fn find_by_availability(&self, available: bool) -> AppResult<Vec<Product>> {
        self.fetch(Products::find().filter(Column::Available.eq(available)))
            .await
    }
}

fn product_from_entity(model: ProductModel) -> AppResult<Product> {
    let category = model.category.parse::<Category>().map_err(|err| {
        AppError::Internal(anyhow!("product {} has corrupt category: {err}", model.id))
    })?;
    Ok(Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        available: model.available,
        category,
    })
}
