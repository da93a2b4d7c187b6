use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter,
};

use verdant_auth_schema::users;
use verdant_catalog_schema::{cart_items, contacts, products};

use crate::domain::repository::{
    AccountPort, CartRepository, ContactRepository, ProductRepository,
};
use crate::domain::types::{CartItem, Contact, Product, ProductUpdate};
use crate::error::CatalogServiceError;

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn create(&self, product: &Product) -> Result<(), CatalogServiceError> {
        products::ActiveModel {
            product_no: Set(product.product_no.clone()),
            name: Set(product.name.clone()),
            small_description: Set(product.small_description.clone()),
            long_description: Set(product.long_description.clone()),
            card_description: Set(product.card_description.clone()),
            category: Set(product.category.clone()),
            price: Set(product.price),
            images: Set(serde_json::json!(product.images)),
            created_at: Set(product.created_at),
        }
        .insert(&self.db)
        .await
        .context("create product")?;
        Ok(())
    }

    async fn find_by_no(
        &self,
        product_no: &str,
    ) -> Result<Option<Product>, CatalogServiceError> {
        let model = products::Entity::find_by_id(product_no.to_owned())
            .one(&self.db)
            .await
            .context("find product by number")?;
        Ok(model.map(product_from_model))
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogServiceError> {
        let mut query = products::Entity::find();
        if let Some(category) = category {
            query = query.filter(products::Column::Category.eq(category));
        }
        let models = query.all(&self.db).await.context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, CatalogServiceError> {
        let models = products::Entity::find()
            .filter(products::Column::Name.eq(name))
            .all(&self.db)
            .await
            .context("find products by name")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn update(
        &self,
        product_no: &str,
        fields: &ProductUpdate,
    ) -> Result<Option<Product>, CatalogServiceError> {
        let Some(existing) = products::Entity::find_by_id(product_no.to_owned())
            .one(&self.db)
            .await
            .context("find product for update")?
        else {
            return Ok(None);
        };

        let mut product = existing.into_active_model();
        product.name = Set(fields.name.clone());
        product.small_description = Set(fields.small_description.clone());
        product.long_description = Set(fields.long_description.clone());
        product.card_description = Set(fields.card_description.clone());
        product.category = Set(fields.category.clone());
        product.price = Set(fields.price);
        let updated = product.update(&self.db).await.context("update product")?;
        Ok(Some(product_from_model(updated)))
    }

    async fn delete(&self, product_no: &str) -> Result<bool, CatalogServiceError> {
        let result = products::Entity::delete_by_id(product_no.to_owned())
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        product_no: model.product_no,
        name: model.name,
        small_description: model.small_description,
        long_description: model.long_description,
        card_description: model.card_description,
        category: model.category,
        price: model.price,
        images: serde_json::from_value(model.images).unwrap_or_default(),
        created_at: model.created_at,
    }
}

// ── Cart repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCartRepository {
    pub db: DatabaseConnection,
}

impl CartRepository for DbCartRepository {
    async fn create(&self, item: &CartItem) -> Result<(), CatalogServiceError> {
        cart_items::ActiveModel {
            item_no: Set(item.item_no),
            cust_email: Set(item.cust_email.clone()),
            cust_name: Set(item.cust_name.clone()),
            cust_mob: Set(item.cust_mob.clone()),
            product_no: Set(item.product_no.clone()),
            product_name: Set(item.product_name.clone()),
            quantity: Set(item.quantity),
            unit_price: Set(item.unit_price),
            total_cost: Set(item.total_cost),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("create cart item")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CartItem>, CatalogServiceError> {
        let models = cart_items::Entity::find()
            .all(&self.db)
            .await
            .context("list cart items")?;
        Ok(models.into_iter().map(cart_item_from_model).collect())
    }
}

fn cart_item_from_model(model: cart_items::Model) -> CartItem {
    CartItem {
        item_no: model.item_no,
        cust_email: model.cust_email,
        cust_name: model.cust_name,
        cust_mob: model.cust_mob,
        product_no: model.product_no,
        product_name: model.product_name,
        quantity: model.quantity,
        unit_price: model.unit_price,
        total_cost: model.total_cost,
        created_at: model.created_at,
    }
}

// ── Contact repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContactRepository {
    pub db: DatabaseConnection,
}

impl ContactRepository for DbContactRepository {
    async fn create(&self, contact: &Contact) -> Result<(), CatalogServiceError> {
        contacts::ActiveModel {
            sno: Set(contact.sno.clone()),
            first_name: Set(contact.first_name.clone()),
            last_name: Set(contact.last_name.clone()),
            email: Set(contact.email.clone()),
            mobile_number: Set(contact.mobile_number.clone()),
            message: Set(contact.message.clone()),
            created_at: Set(contact.created_at),
        }
        .insert(&self.db)
        .await
        .context("create contact")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Contact>, CatalogServiceError> {
        let models = contacts::Entity::find()
            .all(&self.db)
            .await
            .context("list contacts")?;
        Ok(models.into_iter().map(contact_from_model).collect())
    }
}

fn contact_from_model(model: contacts::Model) -> Contact {
    Contact {
        sno: model.sno,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        mobile_number: model.mobile_number,
        message: model.message,
        created_at: model.created_at,
    }
}

// ── Account port ─────────────────────────────────────────────────────────────

/// Existence check against the credential store's `users` table. The gate is
/// the only reader; all writes belong to the auth service.
#[derive(Clone)]
pub struct DbAccountPort {
    pub db: DatabaseConnection,
}

impl AccountPort for DbAccountPort {
    async fn email_exists(&self, email: &str) -> Result<bool, CatalogServiceError> {
        let model = users::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("check account exists")?;
        Ok(model.is_some())
    }
}
