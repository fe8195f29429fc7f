//! 位置报告表单状态

use ship_tracker_shared::LocationReportRequest;
use ship_tracker_shared::countries::is_known_country;
use ship_tracker_shared::date::parse_iso_date;

use crate::error::FieldError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFormValues {
    pub report_date: String,
    pub country: String,
    pub port: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFormErrors {
    pub report_date: Option<FieldError>,
    pub country: Option<FieldError>,
    pub port: Option<FieldError>,
}

impl ReportFormErrors {
    pub fn is_valid(&self) -> bool {
        *self == Self::default()
    }
}

impl ReportFormValues {
    pub fn validate(&self) -> ReportFormErrors {
        let report_date = if self.report_date.trim().is_empty() {
            Some(FieldError::Required)
        } else if parse_iso_date(&self.report_date).is_none() {
            Some(FieldError::InvalidDate)
        } else {
            None
        };

        let country = if self.country.is_empty() {
            Some(FieldError::Required)
        } else if !is_known_country(&self.country) {
            Some(FieldError::UnknownOption)
        } else {
            None
        };

        ReportFormErrors {
            report_date,
            country,
            port: self.port.trim().is_empty().then_some(FieldError::Required),
        }
    }

    pub fn to_request(&self) -> Option<LocationReportRequest> {
        if !self.validate().is_valid() {
            return None;
        }
        Some(LocationReportRequest {
            report_date: parse_iso_date(&self.report_date)?,
            country: self.country.clone(),
            port: self.port.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LocationReportClient;
    use crate::api::testing;
    use crate::api::transport::mock::MockTransport;

    fn filled() -> ReportFormValues {
        ReportFormValues {
            report_date: "2024-03-15".into(),
            country: "Norway".into(),
            port: "Bergen".into(),
        }
    }

    #[test]
    fn every_field_is_required() {
        let errors = ReportFormValues::default().validate();
        assert_eq!(errors.report_date, Some(FieldError::Required));
        assert_eq!(errors.country, Some(FieldError::Required));
        assert_eq!(errors.port, Some(FieldError::Required));
        assert!(ReportFormValues::default().to_request().is_none());
    }

    #[test]
    fn country_must_come_from_list() {
        let values = ReportFormValues {
            country: "Atlantis".into(),
            ..filled()
        };
        assert_eq!(values.validate().country, Some(FieldError::UnknownOption));
        assert!(values.to_request().is_none());
    }

    #[test]
    fn whitespace_port_is_rejected() {
        let values = ReportFormValues {
            port: "   ".into(),
            ..filled()
        };
        assert_eq!(values.validate().port, Some(FieldError::Required));
    }

    #[tokio::test]
    async fn valid_form_posts_iso_date_under_ship() {
        let transport = MockTransport::new();
        transport.respond(
            201,
            r#"{"id":3,"reportDate":"2024-03-15","country":"Norway","port":"Bergen"}"#,
        );
        let reports = LocationReportClient::new(testing::client(&transport));

        let request = filled().to_request().unwrap();
        let created = reports.create(7, request).await.unwrap();

        assert_eq!(created.id, 3);
        let sent = &transport.requests()[0];
        assert_eq!(transport.request_lines(), vec!["POST /api/ships/7/reports"]);
        assert_eq!(
            sent.body.as_deref(),
            Some(r#"{"reportDate":"2024-03-15","country":"Norway","port":"Bergen"}"#)
        );
    }
}
