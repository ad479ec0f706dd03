//! 菜单目录 - 商品与配方的读多写少视图
//!
//! 读 (resolve, list, get) 不与库存访问串行化；与菜单编辑之间用
//! 读写锁互斥，避免读到改到一半的配方。

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{MenuItem, MenuItemUpdate, RecipeLine};
use crate::store::{CollectionStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    #[error("Menu item already exists: {0}")]
    AlreadyExists(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-mostly view over the menu collection.
pub struct MenuCatalog {
    store: Arc<dyn CollectionStore<MenuItem>>,
    items: RwLock<Vec<MenuItem>>,
}

impl MenuCatalog {
    pub fn open(store: Arc<dyn CollectionStore<MenuItem>>) -> Result<Self, StoreError> {
        let items = store.load()?;
        Ok(Self {
            store,
            items: RwLock::new(items),
        })
    }

    /// Resolve a product id to a snapshot of its recipe.
    ///
    /// Pure lookup against the latest completed menu write; recipe
    /// ingredient ids are not checked against inventory here.
    pub fn resolve(&self, product_id: &str) -> Option<Vec<RecipeLine>> {
        self.items
            .read()
            .iter()
            .find(|m| m.id == product_id)
            .map(|m| m.recipe.clone())
    }

    /// Current price of a product, for the reporting reads.
    pub fn price_of(&self, product_id: &str) -> Option<f64> {
        self.items
            .read()
            .iter()
            .find(|m| m.id == product_id)
            .map(|m| m.price)
    }

    pub fn list(&self) -> Vec<MenuItem> {
        self.items.read().clone()
    }

    pub fn get(&self, product_id: &str) -> Option<MenuItem> {
        self.items.read().iter().find(|m| m.id == product_id).cloned()
    }

    pub fn create(&self, item: MenuItem) -> Result<MenuItem, CatalogError> {
        let mut guard = self.items.write();
        if guard.iter().any(|m| m.id == item.id) {
            return Err(CatalogError::AlreadyExists(item.id));
        }

        let mut next = guard.clone();
        next.push(item.clone());
        self.store.save(&next)?;
        *guard = next;
        Ok(item)
    }

    pub fn update(&self, product_id: &str, changes: MenuItemUpdate) -> Result<MenuItem, CatalogError> {
        let mut guard = self.items.write();
        let mut next = guard.clone();
        let item = next
            .iter_mut()
            .find(|m| m.id == product_id)
            .ok_or_else(|| CatalogError::NotFound(product_id.to_string()))?;

        item.name = changes.name;
        item.description = changes.description;
        item.price = changes.price;
        item.recipe = changes.recipe;
        let updated = item.clone();

        self.store.save(&next)?;
        *guard = next;
        Ok(updated)
    }

    pub fn delete(&self, product_id: &str) -> Result<bool, CatalogError> {
        let mut guard = self.items.write();
        let mut next = guard.clone();
        let before = next.len();
        next.retain(|m| m.id != product_id);
        if next.len() == before {
            return Ok(false);
        }

        self.store.save(&next)?;
        *guard = next;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn latte() -> MenuItem {
        MenuItem {
            id: "latte".into(),
            name: "Latte".into(),
            description: String::new(),
            price: 4.5,
            recipe: vec![
                RecipeLine {
                    ingredient_id: "espresso_shot".into(),
                    quantity: 2.0,
                },
                RecipeLine {
                    ingredient_id: "milk".into(),
                    quantity: 150.0,
                },
            ],
        }
    }

    #[test]
    fn resolve_returns_recipe_in_order() {
        let store = Arc::new(MemoryStore::with_items(vec![latte()]));
        let catalog = MenuCatalog::open(store).unwrap();

        let recipe = catalog.resolve("latte").unwrap();
        assert_eq!(recipe[0].ingredient_id, "espresso_shot");
        assert_eq!(recipe[1].ingredient_id, "milk");
        assert!(catalog.resolve("unicorn-latte").is_none());
    }

    #[test]
    fn resolve_reflects_latest_menu_write() {
        let store = Arc::new(MemoryStore::with_items(vec![latte()]));
        let catalog = MenuCatalog::open(store).unwrap();

        catalog
            .update(
                "latte",
                MenuItemUpdate {
                    name: "Latte".into(),
                    description: String::new(),
                    price: 5.0,
                    recipe: vec![RecipeLine {
                        ingredient_id: "milk".into(),
                        quantity: 200.0,
                    }],
                },
            )
            .unwrap();

        assert_eq!(catalog.resolve("latte").unwrap().len(), 1);
        assert_eq!(catalog.price_of("latte"), Some(5.0));
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let store = Arc::new(MemoryStore::with_items(vec![latte()]));
        let catalog = MenuCatalog::open(store).unwrap();
        assert!(matches!(
            catalog.create(latte()),
            Err(CatalogError::AlreadyExists(_))
        ));
    }

    #[test]
    fn failed_save_rolls_nothing_in() {
        let store = Arc::new(MemoryStore::with_items(vec![latte()]));
        let catalog = MenuCatalog::open(store.clone()).unwrap();

        store.fail_saves(true);
        assert!(catalog.delete("latte").is_err());
        assert_eq!(catalog.list().len(), 1);
        assert_eq!(store.persisted().len(), 1);
    }
}
