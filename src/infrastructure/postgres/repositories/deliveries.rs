use anyhow::Result;
use async_trait::async_trait;
use diesel::dsl::{AsSelect, Desc, Order, Select};
use diesel::pg::Pg;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::deliveries::{DeliveryEntity, InsertDeliveryEntity},
        repositories::deliveries::DeliveryRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::deliveries},
};

type ListDeliveriesQuery =
    Select<Order<deliveries::table, Desc<deliveries::created_at>>, AsSelect<DeliveryEntity, Pg>>;

// Most recent shipment first; the dashboard relies on this order.
fn list_deliveries_query() -> ListDeliveriesQuery {
    deliveries::table
        .order(deliveries::created_at.desc())
        .select(DeliveryEntity::as_select())
}

pub struct DeliveryPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl DeliveryPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DeliveryRepository for DeliveryPostgres {
    async fn insert(&self, insert_delivery_entity: InsertDeliveryEntity) -> Result<DeliveryEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(deliveries::table)
            .values(&insert_delivery_entity)
            .returning(DeliveryEntity::as_returning())
            .get_result::<DeliveryEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<DeliveryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = list_deliveries_query().load::<DeliveryEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, delivery_id: Uuid) -> Result<Option<DeliveryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = deliveries::table
            .filter(deliveries::id.eq(delivery_id))
            .select(DeliveryEntity::as_select())
            .first::<DeliveryEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn update_status(&self, delivery_id: Uuid, delivery_status: String) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = update(deliveries::table)
            .filter(deliveries::id.eq(delivery_id))
            .set(deliveries::delivery_status.eq(delivery_status))
            .execute(&mut conn)?;

        Ok(rows)
    }

    async fn delete(&self, delivery_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = delete(deliveries::table)
            .filter(deliveries::id.eq(delivery_id))
            .execute(&mut conn)?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::debug_query;

    #[test]
    fn list_query_orders_by_creation_time_descending() {
        let sql = debug_query::<Pg, _>(&list_deliveries_query()).to_string();
        assert!(
            sql.contains(r#"ORDER BY "deliveries"."created_at" DESC"#),
            "unexpected list SQL: {}",
            sql
        );
    }
}
