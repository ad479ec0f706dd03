//! Order repository
//!
//! Plain persisted collection keyed by order id. Update and delete do NOT
//! recompute or reverse inventory effects; that contract is documented on
//! the handlers and in the model types.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{Order, OrderStatus, OrderUpdate};
use crate::store::{CollectionStore, StoreError};

use super::OrderError;

pub struct OrderRepository {
    store: Arc<dyn CollectionStore<Order>>,
    orders: RwLock<Vec<Order>>,
}

impl OrderRepository {
    pub fn open(store: Arc<dyn CollectionStore<Order>>) -> Result<Self, StoreError> {
        let orders = store.load()?;
        Ok(Self {
            store,
            orders: RwLock::new(orders),
        })
    }

    /// Persist a freshly created order. Durable write first; a failed save
    /// leaves the collection untouched.
    pub fn create(&self, order: Order) -> Result<Order, StoreError> {
        let mut guard = self.orders.write();
        let mut next = guard.clone();
        next.push(order.clone());
        self.store.save(&next)?;
        *guard = next;
        Ok(order)
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.orders.read().iter().find(|o| o.id == id).cloned()
    }

    pub fn list(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    pub fn update(&self, id: &str, changes: OrderUpdate) -> Result<Order, OrderError> {
        let mut guard = self.orders.write();
        let mut next = guard.clone();
        let order = next
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        order.customer_name = changes.customer_name;
        order.lines = changes.lines;
        let updated = order.clone();

        self.store.save(&next)?;
        *guard = next;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<bool, OrderError> {
        let mut guard = self.orders.write();
        let mut next = guard.clone();
        let before = next.len();
        next.retain(|o| o.id != id);
        if next.len() == before {
            return Ok(false);
        }

        self.store.save(&next)?;
        *guard = next;
        Ok(true)
    }

    /// open -> closed transition. No inventory effect; the deduction
    /// already happened at creation.
    pub fn close(&self, id: &str) -> Result<Order, OrderError> {
        let mut guard = self.orders.write();
        let mut next = guard.clone();
        let order = next
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        if order.status == OrderStatus::Closed {
            return Err(OrderError::AlreadyClosed(id.to_string()));
        }
        order.status = OrderStatus::Closed;
        let closed = order.clone();

        self.store.save(&next)?;
        *guard = next;
        Ok(closed)
    }
}
