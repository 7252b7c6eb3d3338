//! Dashboard backend: holds one dataset snapshot in memory and serves statistics as JSON.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! DATA_FILE (optional) points at a JSON dataset or a CSV file of matches loaded at startup.

use actix_web::{
    get, post, put,
    web::{Data, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use fifa_tracker::{Dataset, DatasetError, StatsCalculator, DEFAULT_FORM_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::RwLock;
use uuid::Uuid;

/// The current data version. Replaced wholesale, never edited in place.
struct Snapshot {
    id: Uuid,
    loaded_at: DateTime<Utc>,
    dataset: Dataset,
}

impl Snapshot {
    fn new(dataset: Dataset) -> Self {
        Self {
            id: Uuid::new_v4(),
            loaded_at: Utc::now(),
            dataset: dataset.with_derived_awards(),
        }
    }
}

type AppState = Data<RwLock<Snapshot>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotInfo {
    id: Uuid,
    loaded_at: DateTime<Utc>,
    matches: usize,
    players: usize,
    bans: usize,
    player_of_match_awards: usize,
}

impl SnapshotInfo {
    fn of(s: &Snapshot) -> Self {
        Self {
            id: s.id,
            loaded_at: s.loaded_at,
            matches: s.dataset.matches.len(),
            players: s.dataset.players.len(),
            bans: s.dataset.bans.len(),
            player_of_match_awards: s.dataset.player_of_match_awards.len(),
        }
    }
}

/// Query: `?form=N` on the full report.
#[derive(Deserialize)]
struct ReportQuery {
    #[serde(default = "default_form_length")]
    form: usize,
}

/// Query: `?n=N` on the recent form endpoint.
#[derive(Deserialize)]
struct FormQuery {
    #[serde(default = "default_form_length")]
    n: usize,
}

fn default_form_length() -> usize {
    DEFAULT_FORM_LENGTH
}

/// Run `f` against a fresh calculator over the current snapshot.
fn with_calculator<T, F>(state: &AppState, f: F) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(StatsCalculator<'_>) -> T,
{
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(f(StatsCalculator::from_dataset(&g.dataset)))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "fifa-tracker",
    })
}

/// Snapshot id, load time and collection sizes.
#[get("/api/dataset")]
async fn api_get_dataset(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(SnapshotInfo::of(&g))
}

/// Replace the snapshot with a new data version.
#[put("/api/dataset")]
async fn api_put_dataset(state: AppState, body: Json<Dataset>) -> HttpResponse {
    let snapshot = Snapshot::new(body.into_inner());
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    *g = snapshot;
    log::info!(
        "Loaded dataset {} ({} matches, {} players, {} bans)",
        g.id,
        g.dataset.matches.len(),
        g.dataset.players.len(),
        g.dataset.bans.len()
    );
    HttpResponse::Ok().json(SnapshotInfo::of(&g))
}

/// Full report over the current snapshot.
#[get("/api/stats")]
async fn api_stats(state: AppState, query: Query<ReportQuery>) -> HttpResponse {
    with_calculator(&state, |c| c.report(query.form))
}

/// Full report over the posted dataset; the snapshot is left alone.
#[post("/api/stats/compute")]
async fn api_compute_stats(body: Json<Dataset>, query: Query<ReportQuery>) -> HttpResponse {
    let dataset = body.into_inner().with_derived_awards();
    HttpResponse::Ok().json(StatsCalculator::from_dataset(&dataset).report(query.form))
}

#[get("/api/stats/team-records")]
async fn api_team_records(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.team_records())
}

#[get("/api/stats/recent-form")]
async fn api_recent_form(state: AppState, query: Query<FormQuery>) -> HttpResponse {
    with_calculator(&state, |c| c.recent_form(query.n))
}

#[get("/api/stats/players")]
async fn api_player_stats(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.player_stats())
}

#[get("/api/stats/advanced")]
async fn api_advanced_stats(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.advanced_stats())
}

#[get("/api/stats/trends")]
async fn api_trends(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.performance_trends())
}

#[get("/api/stats/head-to-head")]
async fn api_head_to_head(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.head_to_head())
}

#[get("/api/stats/scorers")]
async fn api_scorers(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.goal_scorer_tally())
}

#[get("/api/stats/cards")]
async fn api_cards(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.card_totals())
}

#[get("/api/stats/finance")]
async fn api_finance(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.finance_summary())
}

#[get("/api/stats/bans")]
async fn api_active_bans(state: AppState) -> HttpResponse {
    with_calculator(&state, |c| c.active_bans())
}

/// Load DATA_FILE: `.csv` is read as a match list, anything else as a JSON dataset.
async fn load_data_file(path: &Path) -> Result<Dataset, DatasetError> {
    let raw = tokio::fs::read(path).await?;
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        Dataset::from_matches_csv(raw.as_slice())
    } else {
        Dataset::from_json_reader(raw.as_slice())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);

    let dataset = match std::env::var("DATA_FILE") {
        Ok(path) => match load_data_file(Path::new(&path)).await {
            Ok(d) => {
                log::info!("Loaded {} matches from {}", d.matches.len(), path);
                d
            }
            Err(e) => {
                log::warn!("{} ({}), starting with an empty dataset", e, path);
                Dataset::default()
            }
        },
        Err(_) => Dataset::default(),
    };

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Snapshot::new(dataset)));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(actix_web::web::JsonConfig::default().limit(8 * 1024 * 1024))
            .service(api_health)
            .service(api_get_dataset)
            .service(api_put_dataset)
            .service(api_stats)
            .service(api_compute_stats)
            .service(api_team_records)
            .service(api_recent_form)
            .service(api_player_stats)
            .service(api_advanced_stats)
            .service(api_trends)
            .service(api_head_to_head)
            .service(api_scorers)
            .service(api_cards)
            .service(api_finance)
            .service(api_active_bans)
    })
    .bind(bind)?
    .run()
    .await
}
