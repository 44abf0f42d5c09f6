use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;
use uuid::Uuid;

/// Radius, in degrees of latitude/longitude, of a coordinate search.
pub const NEARBY_DEGREES: f64 = 1.5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Position {
    pub id: Uuid,
    pub created_at: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub how_to_apply: String,
    pub company: String,
    pub company_url: String,
    pub company_logo: String,
    pub url: String,
    #[serde(skip)]
    pub latitude: f64,
    #[serde(skip)]
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct PositionParams {
    pub description: Option<String>,
    pub location: Option<String>,
    pub full_time: Option<String>,
    pub lat: Option<String>,
    pub long: Option<String>,
}

pub type Db = Arc<Vec<Position>>;

type ApiError = (StatusCode, Json<ErrorBody>);

/// Router serving the built-in seed listings.
pub fn app() -> Router {
    app_with(seed())
}

/// Router serving exactly `positions`, in order.
pub fn app_with(positions: Vec<Position>) -> Router {
    let db: Db = Arc::new(positions);
    Router::new()
        .route("/positions.json", get(list_positions))
        .route("/positions/{file}", get(get_position))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_positions(
    State(db): State<Db>,
    Query(params): Query<PositionParams>,
) -> Result<Json<Vec<Position>>, ApiError> {
    if params.lat.is_some() || params.long.is_some() {
        let lat = parse_degrees("lat", params.lat.as_deref())?;
        let long = parse_degrees("long", params.long.as_deref())?;
        debug!(lat, long, "coordinate search");
        let found = db
            .iter()
            .filter(|p| {
                (p.latitude - lat).abs() <= NEARBY_DEGREES
                    && (p.longitude - long).abs() <= NEARBY_DEGREES
            })
            .cloned()
            .collect();
        return Ok(Json(found));
    }

    let full_time = params.full_time.as_deref() == Some("true");
    debug!(description = ?params.description, location = ?params.location, full_time, "keyword search");
    let found = db
        .iter()
        .filter(|p| {
            params.description.as_deref().map_or(true, |d| {
                contains_ci(&p.title, d) || contains_ci(&p.description, d)
            })
        })
        .filter(|p| {
            params
                .location
                .as_deref()
                .map_or(true, |l| contains_ci(&p.location, l))
        })
        .filter(|p| !full_time || p.kind == "Full Time")
        .cloned()
        .collect();
    Ok(Json(found))
}

async fn get_position(
    State(db): State<Db>,
    Path(file): Path<String>,
) -> Result<Json<Position>, ApiError> {
    let id = file
        .strip_suffix(".json")
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .ok_or_else(not_found)?;
    db.iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Job not found".to_string(),
        }),
    )
}

fn parse_degrees(name: &str, raw: Option<&str>) -> Result<f64, ApiError> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: format!("{name} must be a decimal degree value"),
                }),
            )
        })
}

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[allow(clippy::too_many_arguments)]
fn position(
    id: u128,
    title: &str,
    location: &str,
    kind: &str,
    company: &str,
    description: &str,
    latitude: f64,
    longitude: f64,
) -> Position {
    let id = Uuid::from_u128(id);
    let slug = company.to_lowercase().replace(' ', "-");
    Position {
        id,
        created_at: "Mon Oct 24 18:46:49 UTC 2016".to_string(),
        title: title.to_string(),
        location: location.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
        how_to_apply: format!("<p>Email jobs@{slug}.example</p>"),
        company: company.to_string(),
        company_url: format!("https://{slug}.example"),
        company_logo: format!("https://{slug}.example/logo.png"),
        url: format!("https://jobs.github.com/positions/{id}"),
        latitude,
        longitude,
    }
}

/// Fixed listings served by [`app`].
pub fn seed() -> Vec<Position> {
    vec![
        position(
            0x4dfece3c_97c4_11e6_97f0_6745f96d2097,
            "Senior Go Engineer",
            "Seattle, WA",
            "Full Time",
            "Emerald Freight",
            "<p>Build our dispatch platform in Go.</p>",
            47.606_21,
            -122.332_07,
        ),
        position(
            0x1a2b3c4d_0000_4000_8000_000000000002,
            "Rust Contractor",
            "Bellevue, WA",
            "Contract",
            "Cascade Data",
            "<p>Port a storage engine to Rust.</p>",
            47.610_15,
            -122.201_54,
        ),
        position(
            0x1a2b3c4d_0000_4000_8000_000000000003,
            "Backend Developer (Rust)",
            "Berlin, Germany",
            "Full Time",
            "Spree Logistics",
            "<p>Rust and PostgreSQL services.</p>",
            52.520_01,
            13.404_95,
        ),
        position(
            0x1a2b3c4d_0000_4000_8000_000000000004,
            "Go Jobs Platform Engineer",
            "New York, NY",
            "Part Time",
            "Hudson Boards",
            "<p>Keep our go jobs board running.</p>",
            40.712_78,
            -74.005_94,
        ),
    ]
}
