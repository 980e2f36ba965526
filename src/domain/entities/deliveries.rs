use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::deliveries;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = deliveries)]
pub struct DeliveryEntity {
    pub id: Uuid,
    pub sender_name: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub delivery_time: String,
    pub delivery_status: String,
    pub packaging_type: String,
    pub assigned_driver: String,
    pub amount: f64,
    pub package_description: String,
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub created_at: DateTime<Utc>,
}

// id and created_at are filled by the database on insert.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = deliveries)]
pub struct InsertDeliveryEntity {
    pub sender_name: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub delivery_time: String,
    pub delivery_status: String,
    pub packaging_type: String,
    pub assigned_driver: String,
    pub amount: f64,
    pub package_description: String,
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}
