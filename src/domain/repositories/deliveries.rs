use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::deliveries::{DeliveryEntity, InsertDeliveryEntity};

#[automock]
#[async_trait]
pub trait DeliveryRepository {
    async fn insert(&self, insert_delivery_entity: InsertDeliveryEntity) -> Result<DeliveryEntity>;
    async fn list(&self) -> Result<Vec<DeliveryEntity>>;
    async fn find_by_id(&self, delivery_id: Uuid) -> Result<Option<DeliveryEntity>>;
    async fn update_status(&self, delivery_id: Uuid, delivery_status: String) -> Result<usize>;
    async fn delete(&self, delivery_id: Uuid) -> Result<usize>;
}
