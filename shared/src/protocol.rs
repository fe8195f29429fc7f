use crate::{
    GeneratedName, LocationReport, LocationReportRequest, LoginRequest, Ship, ShipId,
    ShipRequest,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths are relative to the API base URL and may embed identifiers,
/// so they are computed per value rather than stored as constants.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path (or suffix).
    fn path(&self) -> String;

    /// JSON request body, if the endpoint takes one.
    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        Ok(None)
    }
}

/// Responses whose payload the client does not keep (login/logout/me acknowledgements).
pub type Ack = IgnoredAny;

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        serde_json::to_string(self).map(Some)
    }
}

/// End the server-side session. Serializes as `{}`.
#[derive(Debug, Default, Serialize)]
pub struct LogoutRequest {}

impl ApiRequest for LogoutRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/logout".to_string()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        serde_json::to_string(self).map(Some)
    }
}

/// Ask whether the current cookie still maps to a live session.
#[derive(Debug, Default)]
pub struct SessionCheckRequest;

impl ApiRequest for SessionCheckRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/auth/me".to_string()
    }
}

// =========================================================
// Ships
// =========================================================

#[derive(Debug, Default)]
pub struct ListShipsRequest;

impl ApiRequest for ListShipsRequest {
    type Response = Vec<Ship>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/ships".to_string()
    }
}

#[derive(Debug)]
pub struct GetShipRequest {
    pub id: ShipId,
}

impl ApiRequest for GetShipRequest {
    type Response = Ship;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/ships/{}", self.id)
    }
}

#[derive(Debug)]
pub struct CreateShipRequest {
    pub ship: ShipRequest,
}

impl ApiRequest for CreateShipRequest {
    type Response = Ship;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/ships".to_string()
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        serde_json::to_string(&self.ship).map(Some)
    }
}

#[derive(Debug)]
pub struct UpdateShipRequest {
    pub id: ShipId,
    pub ship: ShipRequest,
}

impl ApiRequest for UpdateShipRequest {
    type Response = Ship;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/ships/{}", self.id)
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        serde_json::to_string(&self.ship).map(Some)
    }
}

#[derive(Debug, Default)]
pub struct GenerateNameRequest;

impl ApiRequest for GenerateNameRequest {
    type Response = GeneratedName;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/ships/generate-name".to_string()
    }
}

// =========================================================
// Location reports
// =========================================================

#[derive(Debug)]
pub struct ListReportsRequest {
    pub ship_id: ShipId,
}

impl ApiRequest for ListReportsRequest {
    type Response = Vec<LocationReport>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/ships/{}/reports", self.ship_id)
    }
}

#[derive(Debug)]
pub struct CreateReportRequest {
    pub ship_id: ShipId,
    pub report: LocationReportRequest,
}

impl ApiRequest for CreateReportRequest {
    type Response = LocationReport;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/ships/{}/reports", self.ship_id)
    }

    fn body(&self) -> Result<Option<String>, serde_json::Error> {
        serde_json::to_string(&self.report).map(Some)
    }
}
