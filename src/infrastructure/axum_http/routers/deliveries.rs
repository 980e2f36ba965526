use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post, put},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    application::usecases::deliveries::DeliveriesUseCase,
    config::config_model::DotEnvyConfig,
    domain::{
        repositories::deliveries::DeliveryRepository,
        value_objects::deliveries::InsertDeliveryModel,
    },
    infrastructure::{
        axum_http::api_response::ApiResponse,
        postgres::{postgres_connection::PgPoolSquad, repositories::deliveries::DeliveryPostgres},
    },
};

#[derive(Debug, Deserialize)]
pub struct ChangeDeliveryStatusModel {
    pub status: String,
}

pub fn routes(db_pool: Arc<PgPoolSquad>, config: Arc<DotEnvyConfig>) -> Router {
    let delivery_repository = DeliveryPostgres::new(Arc::clone(&db_pool));
    let deliveries_usecase = DeliveriesUseCase::new(
        Arc::new(delivery_repository),
        config.delivery.strict_status_transitions,
    );

    Router::new()
        .route("/", post(create_delivery).get(list_deliveries))
        .route(
            "/:delivery_id",
            get(get_delivery_by_id).delete(delete_delivery),
        )
        .route("/:delivery_id/status", put(change_delivery_status))
        .route("/:delivery_id/tracking", get(track_delivery))
        .with_state(Arc::new(deliveries_usecase))
}

pub async fn create_delivery<T>(
    State(deliveries_usecase): State<Arc<DeliveriesUseCase<T>>>,
    Json(insert_delivery_model): Json<InsertDeliveryModel>,
) -> impl IntoResponse
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    info!("deliveries: create request received");
    match deliveries_usecase.create_delivery(insert_delivery_model).await {
        Ok(delivery) => ApiResponse::ok(delivery).into_response(),
        Err(err) => {
            error!(error = %err, "deliveries: failed to create delivery");
            err.into_response()
        }
    }
}

pub async fn list_deliveries<T>(
    State(deliveries_usecase): State<Arc<DeliveriesUseCase<T>>>,
) -> impl IntoResponse
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    info!("deliveries: list request received");
    match deliveries_usecase.list_deliveries().await {
        Ok(deliveries) => ApiResponse::ok(deliveries).into_response(),
        Err(err) => {
            error!(error = %err, "deliveries: failed to list deliveries");
            err.into_response()
        }
    }
}

pub async fn get_delivery_by_id<T>(
    State(deliveries_usecase): State<Arc<DeliveriesUseCase<T>>>,
    Path(delivery_id): Path<String>,
) -> impl IntoResponse
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    info!(%delivery_id, "deliveries: get-by-id request received");
    match deliveries_usecase.get_delivery_by_id(&delivery_id).await {
        Ok(delivery) => ApiResponse::ok(delivery).into_response(),
        Err(err) => {
            error!(%delivery_id, error = %err, "deliveries: failed to get delivery");
            err.into_response()
        }
    }
}

pub async fn track_delivery<T>(
    State(deliveries_usecase): State<Arc<DeliveriesUseCase<T>>>,
    Path(delivery_id): Path<String>,
) -> impl IntoResponse
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    info!(%delivery_id, "deliveries: tracking request received");
    match deliveries_usecase.track_delivery(&delivery_id).await {
        Ok(tracking) => ApiResponse::ok(tracking).into_response(),
        Err(err) => {
            error!(%delivery_id, error = %err, "deliveries: failed to track delivery");
            err.into_response()
        }
    }
}

pub async fn change_delivery_status<T>(
    State(deliveries_usecase): State<Arc<DeliveriesUseCase<T>>>,
    Path(delivery_id): Path<String>,
    Json(change_status_model): Json<ChangeDeliveryStatusModel>,
) -> impl IntoResponse
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    info!(%delivery_id, status = %change_status_model.status, "deliveries: status change request received");
    match deliveries_usecase
        .change_delivery_status(&delivery_id, &change_status_model.status)
        .await
    {
        Ok(result) => ApiResponse::ok(result).into_response(),
        Err(err) => {
            error!(%delivery_id, error = %err, "deliveries: failed to change delivery status");
            err.into_response()
        }
    }
}

pub async fn delete_delivery<T>(
    State(deliveries_usecase): State<Arc<DeliveriesUseCase<T>>>,
    Path(delivery_id): Path<String>,
) -> impl IntoResponse
where
    T: DeliveryRepository + Send + Sync + 'static,
{
    info!(%delivery_id, "deliveries: delete request received");
    match deliveries_usecase.delete_delivery(&delivery_id).await {
        Ok(result) => ApiResponse::ok(result).into_response(),
        Err(err) => {
            error!(%delivery_id, error = %err, "deliveries: failed to delete delivery");
            err.into_response()
        }
    }
}
