use serde::Serialize;
use std::sync::Arc;

use crate::domain::{
    errors::DeliveryError,
    repositories::deliveries::DeliveryRepository,
    value_objects::{
        deliveries::{DeliveryModel, InsertDeliveryModel, parse_delivery_id},
        delivery_progress::{
            TrackingStep, active_step_index, progress_percent, tracking_steps, transition_allowed,
        },
        enums::delivery_statuses::DeliveryStatus,
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTrackingDto {
    #[serde(flatten)]
    pub delivery: DeliveryModel,
    pub progress_percent: u8,
    pub active_step_index: i32,
    pub steps: Vec<TrackingStep>,
}

impl From<DeliveryModel> for DeliveryTrackingDto {
    fn from(delivery: DeliveryModel) -> Self {
        let status = delivery.delivery_status.clone();
        Self {
            delivery,
            progress_percent: progress_percent(&status),
            active_step_index: active_step_index(&status),
            steps: tracking_steps(&status),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusResultDto {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultDto {
    pub deleted_count: u64,
}

pub struct DeliveriesUseCase<T>
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    delivery_repository: Arc<T>,
    strict_status_transitions: bool,
}

impl<T> DeliveriesUseCase<T>
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    pub fn new(delivery_repository: Arc<T>, strict_status_transitions: bool) -> Self {
        Self {
            delivery_repository,
            strict_status_transitions,
        }
    }

    pub async fn create_delivery(
        &self,
        insert_delivery_model: InsertDeliveryModel,
    ) -> Result<DeliveryModel, DeliveryError> {
        insert_delivery_model.validate()?;

        let entity = self
            .delivery_repository
            .insert(insert_delivery_model.to_entity())
            .await?;

        Ok(DeliveryModel::from(entity))
    }

    pub async fn list_deliveries(&self) -> Result<Vec<DeliveryModel>, DeliveryError> {
        let entities = self.delivery_repository.list().await?;

        Ok(entities.into_iter().map(DeliveryModel::from).collect())
    }

    pub async fn get_delivery_by_id(&self, raw_id: &str) -> Result<DeliveryModel, DeliveryError> {
        let delivery_id = parse_delivery_id(raw_id)?;

        let entity = self
            .delivery_repository
            .find_by_id(delivery_id)
            .await?
            .ok_or(DeliveryError::NotFound)?;

        Ok(DeliveryModel::from(entity))
    }

    pub async fn track_delivery(&self, raw_id: &str) -> Result<DeliveryTrackingDto, DeliveryError> {
        let delivery = self.get_delivery_by_id(raw_id).await?;

        Ok(DeliveryTrackingDto::from(delivery))
    }

    pub async fn change_delivery_status(
        &self,
        raw_id: &str,
        raw_status: &str,
    ) -> Result<UpdateStatusResultDto, DeliveryError> {
        let delivery_id = parse_delivery_id(raw_id)?;
        let new_status = DeliveryStatus::try_from(raw_status)
            .map_err(|_| DeliveryError::InvalidStatus(raw_status.to_string()))?;

        if self.strict_status_transitions {
            let current = match self.delivery_repository.find_by_id(delivery_id).await? {
                Some(entity) => entity,
                None => {
                    return Ok(UpdateStatusResultDto {
                        matched_count: 0,
                        modified_count: 0,
                    });
                }
            };

            // Rows written before the guard existed may hold a status
            // outside the enumeration; those are left free to repair.
            if let Ok(current_status) = DeliveryStatus::try_from(current.delivery_status.as_str()) {
                if !transition_allowed(current_status, new_status) {
                    return Err(DeliveryError::TransitionNotAllowed {
                        from: current_status,
                        to: new_status,
                    });
                }
            }
        }

        let rows = self
            .delivery_repository
            .update_status(delivery_id, new_status.to_string())
            .await?;

        Ok(UpdateStatusResultDto {
            matched_count: rows as u64,
            modified_count: rows as u64,
        })
    }

    pub async fn delete_delivery(&self, raw_id: &str) -> Result<DeleteResultDto, DeliveryError> {
        let delivery_id = parse_delivery_id(raw_id)?;

        let rows = self.delivery_repository.delete(delivery_id).await?;

        Ok(DeleteResultDto {
            deleted_count: rows as u64,
        })
    }
}
