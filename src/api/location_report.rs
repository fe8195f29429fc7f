use ship_tracker_shared::protocol::{CreateReportRequest, ListReportsRequest};
use ship_tracker_shared::{LocationReport, LocationReportRequest, ShipId};

use super::ApiClient;
use crate::error::ApiError;

/// 位置报告资源客户端（始终以船舶 ID 为作用域）
#[derive(Clone)]
pub struct LocationReportClient {
    api: ApiClient,
}

impl LocationReportClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, ship_id: ShipId) -> Result<Vec<LocationReport>, ApiError> {
        self.api.send(&ListReportsRequest { ship_id }).await
    }

    pub async fn create(
        &self,
        ship_id: ShipId,
        report: LocationReportRequest,
    ) -> Result<LocationReport, ApiError> {
        self.api.send(&CreateReportRequest { ship_id, report }).await
    }
}
