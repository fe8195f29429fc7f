//! 船舶表单状态管理模块
//!
//! 将表单字段整合为 `ShipFormValues` 结构体，负责：
//! - 数据的持有
//! - 校验结果的推导
//! - 数据到请求对象的转换
//! - 按模式（新建 / 编辑）提交

use ship_tracker_shared::date::{parse_iso_date, to_iso_date};
use ship_tracker_shared::{Ship, ShipId, ShipRequest, ShipType};

use crate::api::ShipClient;
use crate::components::view_state::ViewState;
use crate::error::{ApiError, FieldError};

pub const MIN_TONNAGE: u32 = 1;

/// 表单模式，由路由参数决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ShipId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// 编辑模式在预填完成前处于加载状态，表单不可编辑
    pub fn initial_view_state(&self) -> ViewState {
        match self {
            FormMode::Create => ViewState::default(),
            FormMode::Edit(_) => ViewState::loading(),
        }
    }

    /// 新建走 POST，编辑走 PUT，请求体结构相同
    pub async fn save(&self, ships: &ShipClient, request: ShipRequest) -> Result<Ship, ApiError> {
        match self {
            FormMode::Create => ships.create(request).await,
            FormMode::Edit(id) => ships.update(*id, request).await,
        }
    }
}

/// 表单字段原始值
///
/// 日期与吨位保留输入框中的原始字符串，在校验时解析。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFormValues {
    pub name: String,
    pub launch_date: String,
    pub ship_type: Option<ShipType>,
    pub tonnage: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipFormErrors {
    pub name: Option<FieldError>,
    pub launch_date: Option<FieldError>,
    pub ship_type: Option<FieldError>,
    pub tonnage: Option<FieldError>,
}

impl ShipFormErrors {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

impl ShipFormValues {
    /// 编辑模式下用服务端记录预填
    pub fn from_ship(ship: &Ship) -> Self {
        Self {
            name: ship.name.clone(),
            launch_date: to_iso_date(ship.launch_date),
            ship_type: Some(ship.ship_type),
            tonnage: ship.tonnage.to_string(),
        }
    }

    pub fn validate(&self) -> ShipFormErrors {
        ShipFormErrors {
            name: self.name.is_empty().then_some(FieldError::Required),
            launch_date: validate_date(&self.launch_date),
            ship_type: self.ship_type.is_none().then_some(FieldError::Required),
            tonnage: parse_tonnage(&self.tonnage).err(),
        }
    }

    /// 校验通过时转换为请求对象
    pub fn to_request(&self) -> Option<ShipRequest> {
        let launch_date = parse_iso_date(&self.launch_date)?;
        let ship_type = self.ship_type?;
        let tonnage = parse_tonnage(&self.tonnage).ok()?;
        if self.name.is_empty() {
            return None;
        }

        Some(ShipRequest {
            name: self.name.clone(),
            launch_date,
            ship_type,
            tonnage,
        })
    }
}

fn validate_date(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else if parse_iso_date(value).is_none() {
        Some(FieldError::InvalidDate)
    } else {
        None
    }
}

fn parse_tonnage(value: &str) -> Result<f64, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }

    let tonnage = value
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or(FieldError::NotANumber)?;

    if tonnage < f64::from(MIN_TONNAGE) {
        return Err(FieldError::BelowMinimum(MIN_TONNAGE));
    }
    Ok(tonnage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing;
    use crate::api::transport::mock::MockTransport;
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    const SHIP_JSON: &str = r#"{"id":4,"name":"MV Test","launchDate":"2020-01-01","shipType":"Cargo","tonnage":5000.0,"reportCount":3}"#;

    fn filled() -> ShipFormValues {
        ShipFormValues {
            name: "MV Test".into(),
            launch_date: "2020-01-01".into(),
            ship_type: Some(ShipType::Cargo),
            tonnage: "5000".into(),
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ShipFormValues::default().validate();
        assert_eq!(
            errors,
            ShipFormErrors {
                name: Some(FieldError::Required),
                launch_date: Some(FieldError::Required),
                ship_type: Some(FieldError::Required),
                tonnage: Some(FieldError::Required),
            }
        );
        assert!(ShipFormValues::default().to_request().is_none());
    }

    #[test]
    fn tonnage_minimum_is_one() {
        for (input, expected) in [
            ("0", Some(FieldError::BelowMinimum(1))),
            ("-5", Some(FieldError::BelowMinimum(1))),
            ("0.5", Some(FieldError::BelowMinimum(1))),
            ("abc", Some(FieldError::NotANumber)),
            ("inf", Some(FieldError::NotANumber)),
            ("1", None),
            ("75000.25", None),
        ] {
            let values = ShipFormValues {
                tonnage: input.into(),
                ..filled()
            };
            assert_eq!(values.validate().tonnage, expected, "tonnage {input}");
            assert_eq!(values.to_request().is_some(), expected.is_none());
        }
    }

    #[test]
    fn edit_form_starts_locked_until_prefill() {
        assert!(FormMode::Edit(4).initial_view_state().loading);
        assert_eq!(FormMode::Create.initial_view_state(), ViewState::default());
    }

    #[test]
    fn invalid_date_is_rejected() {
        let values = ShipFormValues {
            launch_date: "2020-13-01".into(),
            ..filled()
        };
        assert_eq!(values.validate().launch_date, Some(FieldError::InvalidDate));
        assert!(values.to_request().is_none());
    }

    #[test]
    fn prefill_from_ship_round_trips_to_same_request() {
        let ship: Ship = serde_json::from_str(SHIP_JSON).unwrap();
        let values = ShipFormValues::from_ship(&ship);

        assert_eq!(values.launch_date, "2020-01-01");
        assert!(values.validate().is_valid());
        assert_eq!(
            values.to_request(),
            Some(ShipRequest {
                name: "MV Test".into(),
                launch_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                ship_type: ShipType::Cargo,
                tonnage: 5000.0,
            })
        );
    }

    #[tokio::test]
    async fn create_mode_posts_and_edit_mode_puts() {
        let transport = MockTransport::new();
        transport.respond(201, SHIP_JSON);
        transport.respond(200, SHIP_JSON);
        let ships = ShipClient::new(testing::client(&transport));
        let request = filled().to_request().unwrap();

        FormMode::Create.save(&ships, request.clone()).await.unwrap();
        FormMode::Edit(4).save(&ships, request).await.unwrap();

        assert_eq!(
            transport.request_lines(),
            vec!["POST /api/ships", "PUT /api/ships/4"]
        );
        let expected = json!({
            "name": "MV Test",
            "launchDate": "2020-01-01",
            "shipType": "Cargo",
            "tonnage": 5000.0
        });
        for req in transport.requests() {
            let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(body, expected);
        }
    }

    #[tokio::test]
    async fn failed_save_surfaces_error() {
        let transport = MockTransport::new();
        transport.respond(400, "Validation error");
        let ships = ShipClient::new(testing::client(&transport));

        let err = FormMode::Create
            .save(&ships, filled().to_request().unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 400, .. }));
    }
}
