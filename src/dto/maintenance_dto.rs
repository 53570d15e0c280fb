use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::maintenance::MaintenanceLog;

// Request para abrir un registro de mantenimiento
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Option<Uuid>,
    pub issue: Option<String>,
    pub service_date: Option<String>,
    pub cost: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMaintenanceStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub issue: String,
    pub service_date: String,
    pub cost: i32,
    pub status: String,
}

impl From<MaintenanceLog> for MaintenanceResponse {
    fn from(log: MaintenanceLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            issue: log.issue,
            service_date: log.service_date.to_string(),
            cost: log.cost,
            status: log.status,
        }
    }
}
