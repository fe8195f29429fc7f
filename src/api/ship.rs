use ship_tracker_shared::protocol::{
    CreateShipRequest, GenerateNameRequest, GetShipRequest, ListShipsRequest, UpdateShipRequest,
};
use ship_tracker_shared::{Ship, ShipId, ShipRequest};

use super::ApiClient;
use crate::error::ApiError;

/// 船舶资源客户端
#[derive(Clone)]
pub struct ShipClient {
    api: ApiClient,
}

impl ShipClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// 获取全部船舶
    pub async fn list(&self) -> Result<Vec<Ship>, ApiError> {
        self.api.send(&ListShipsRequest).await
    }

    pub async fn get(&self, id: ShipId) -> Result<Ship, ApiError> {
        self.api.send(&GetShipRequest { id }).await
    }

    pub async fn create(&self, ship: ShipRequest) -> Result<Ship, ApiError> {
        self.api.send(&CreateShipRequest { ship }).await
    }

    pub async fn update(&self, id: ShipId, ship: ShipRequest) -> Result<Ship, ApiError> {
        self.api.send(&UpdateShipRequest { id, ship }).await
    }

    /// 向服务端请求一个建议的船名
    pub async fn generate_name(&self) -> Result<String, ApiError> {
        self.api
            .send(&GenerateNameRequest)
            .await
            .map(|generated| generated.name)
    }
}
