use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod countries;
pub mod date;
pub mod protocol;

pub use countries::{COUNTRIES, is_known_country};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端 API 的默认路径前缀
pub const DEFAULT_API_PREFIX: &str = "/api";

pub type ShipId = i64;
pub type ReportId = i64;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 船舶类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    Cargo,
    Tanker,
    Container,
    #[serde(rename = "Bulk Carrier")]
    BulkCarrier,
}

impl ShipType {
    pub const ALL: [ShipType; 4] = [
        ShipType::Cargo,
        ShipType::Tanker,
        ShipType::Container,
        ShipType::BulkCarrier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Cargo => "Cargo",
            ShipType::Tanker => "Tanker",
            ShipType::Container => "Container",
            ShipType::BulkCarrier => "Bulk Carrier",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShipType(pub String);

impl fmt::Display for UnknownShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown ship type: {}", self.0)
    }
}

impl std::error::Error for UnknownShipType {}

impl FromStr for ShipType {
    type Err = UnknownShipType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownShipType(s.to_string()))
    }
}

/// 服务端返回的船舶记录
///
/// `id` 与 `report_count` 由服务端生成，客户端只读。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: ShipId,
    pub name: String,
    pub launch_date: NaiveDate,
    pub ship_type: ShipType,
    pub tonnage: f64,
    pub report_count: u32,
}

/// 创建 / 更新船舶的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRequest {
    pub name: String,
    pub launch_date: NaiveDate,
    pub ship_type: ShipType,
    pub tonnage: f64,
}

/// 位置报告，始终归属于某一艘船
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReport {
    pub id: ReportId,
    pub report_date: NaiveDate,
    pub country: String,
    pub port: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReportRequest {
    pub report_date: NaiveDate,
    pub country: String,
    pub port: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ship_type_uses_display_names_on_the_wire() {
        let value = serde_json::to_value(ShipType::BulkCarrier).unwrap();
        assert_eq!(value, json!("Bulk Carrier"));

        let parsed: ShipType = serde_json::from_value(json!("Tanker")).unwrap();
        assert_eq!(parsed, ShipType::Tanker);
        assert!(serde_json::from_value::<ShipType>(json!("Submarine")).is_err());
    }

    #[test]
    fn ship_type_from_str_matches_labels() {
        assert_eq!("Bulk Carrier".parse::<ShipType>(), Ok(ShipType::BulkCarrier));
        assert_eq!(
            "bulk carrier".parse::<ShipType>(),
            Err(UnknownShipType("bulk carrier".to_string()))
        );
    }

    #[test]
    fn ship_response_decodes_camel_case_payload() {
        let ship: Ship = serde_json::from_value(json!({
            "id": 3,
            "name": "Atlantic Pioneer",
            "launchDate": "2015-06-20",
            "shipType": "Cargo",
            "tonnage": 75000.00,
            "reportCount": 2
        }))
        .unwrap();

        assert_eq!(ship.id, 3);
        assert_eq!(ship.launch_date, NaiveDate::from_ymd_opt(2015, 6, 20).unwrap());
        assert_eq!(ship.ship_type, ShipType::Cargo);
        assert_eq!(ship.report_count, 2);
    }

    #[test]
    fn location_report_request_serializes_iso_date() {
        let req = LocationReportRequest {
            report_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            country: "Norway".to_string(),
            port: "Bergen".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"reportDate":"2024-03-15","country":"Norway","port":"Bergen"}"#
        );
    }
}
