//! Single binary web server: JSON REST API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use racha_web::{
    adjust_score, advance, can_advance, finalize_fixture, rank, record_player_assist,
    record_player_goal, start_tournament, Adjustment, FixtureId, MemoryStore, Player,
    PlayerId, Repository, Side, TeamDraw, Tournament,
};
use racha_web::models::{SKILL_MAX, SKILL_MIN};
use serde::Deserialize;
use std::sync::RwLock;

/// Single-operator state: one repository over an in-memory store. Every
/// handler takes the write lock, runs one engine operation, and writes the
/// modified aggregate back before releasing it.
type AppState = Data<RwLock<Repository<MemoryStore>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayerBody {
    first_name: String,
    last_name: String,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    whatsapp: Option<String>,
    skill: u8,
}

#[derive(Deserialize)]
struct DrawBody {
    /// Optional custom team labels; defaults to Verde/Amarelo/Branco/Azul.
    #[serde(default)]
    labels: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct AdjustScoreBody {
    side: Side,
    adjustment: Adjustment,
}

#[derive(Deserialize)]
struct AdjustStatBody {
    adjustment: Adjustment,
}

/// Path segment: player id (e.g. /api/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

/// Path segment: fixture id (e.g. /api/tournament/fixtures/{fixture_id})
#[derive(Deserialize)]
struct FixturePath {
    fixture_id: FixtureId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "racha-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.players())
}

/// Register a player on the roster.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<PlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut player = Player::new(body.first_name.trim(), body.last_name.trim(), body.skill);
    if let Some(nick) = body.nickname.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        player = player.with_nickname(nick);
    }
    if let Some(whatsapp) = &body.whatsapp {
        player.whatsapp = whatsapp.clone();
    }
    let mut players = g.players();
    players.push(player.clone());
    g.save_players(&players);
    HttpResponse::Ok().json(player)
}

/// Update a player's identity fields. Counters are preserved.
#[put("/api/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players = g.players();
    let Some(player) = players.iter_mut().find(|p| p.id == path.player_id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" }));
    };
    player.first_name = body.first_name.trim().to_string();
    player.last_name = body.last_name.trim().to_string();
    player.nickname = body
        .nickname
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    if let Some(whatsapp) = &body.whatsapp {
        player.whatsapp = whatsapp.clone();
    }
    player.skill = body.skill.clamp(SKILL_MIN, SKILL_MAX);
    let updated = player.clone();
    g.save_players(&players);
    HttpResponse::Ok().json(updated)
}

/// Remove a player from the roster (and from the pending selection).
#[delete("/api/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players = g.players();
    let before = players.len();
    players.retain(|p| p.id != path.player_id);
    if players.len() == before {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" }));
    }
    g.save_players(&players);
    g.remove_from_selection(path.player_id);
    HttpResponse::Ok().json(players)
}

/// Record a goal (or take one back) for a roster player.
#[post("/api/players/{player_id}/goals")]
async fn api_record_goal(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<AdjustStatBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players = g.players();
    match record_player_goal(&mut players, path.player_id, body.adjustment) {
        Ok(()) => {
            g.save_players(&players);
            HttpResponse::Ok().json(players)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Record an assist (or take one back) for a roster player.
#[post("/api/players/{player_id}/assists")]
async fn api_record_assist(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<AdjustStatBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players = g.players();
    match record_player_assist(&mut players, path.player_id, body.adjustment) {
        Ok(()) => {
            g.save_players(&players);
            HttpResponse::Ok().json(players)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/selection")]
async fn api_get_selection(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.selection())
}

/// Add a player to the pending selection (capped at 20; past the cap the
/// call is a no-op and `added` is false).
#[post("/api/selection/{player_id}")]
async fn api_select_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if !g.players().iter().any(|p| p.id == path.player_id) {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" }));
    }
    let added = g.add_to_selection(path.player_id);
    HttpResponse::Ok().json(serde_json::json!({
        "added": added,
        "selection": g.selection(),
    }))
}

#[delete("/api/selection/{player_id}")]
async fn api_deselect_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.remove_from_selection(path.player_id);
    HttpResponse::Ok().json(g.selection())
}

#[delete("/api/selection")]
async fn api_clear_selection(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.clear_selection();
    HttpResponse::Ok().json(serde_json::json!({ "selection": [] }))
}

/// Draw the selected players into balanced teams and create a fresh
/// tournament (overwriting any previous one; lifetime stats survive on the
/// roster).
#[post("/api/draw")]
async fn api_draw_teams(state: AppState, body: Option<Json<DrawBody>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let selection = g.selection();
    let selected: Vec<Player> = g
        .players()
        .into_iter()
        .filter(|p| selection.contains(&p.id))
        .collect();

    let mut draw = TeamDraw::new();
    if let Some(labels) = body.and_then(|b| b.into_inner().labels) {
        draw = draw.labels(labels);
    }
    match draw.draw(&selected) {
        Ok(teams) => {
            let tournament = Tournament::new(teams);
            g.save_tournament(&tournament);
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Get the current tournament (404 if no draw has happened yet).
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament() {
        Some(tournament) => HttpResponse::Ok().json(tournament),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Start the tournament: reset counters and generate the group fixtures.
#[post("/api/tournament/start")]
async fn api_start_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(mut tournament) = g.tournament() else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    };
    let mut players = g.players();
    match start_tournament(&mut tournament, &mut players) {
        Ok(()) => {
            g.save_tournament(&tournament);
            g.save_players(&players);
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/tournament/can-advance")]
async fn api_can_advance(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament() {
        Some(tournament) => {
            HttpResponse::Ok().json(serde_json::json!({ "can_advance": can_advance(&tournament) }))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Advance to the next phase (semifinals, final, or completion).
#[post("/api/tournament/advance")]
async fn api_advance(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(mut tournament) = g.tournament() else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    };
    match advance(&mut tournament) {
        Ok(()) => {
            g.save_tournament(&tournament);
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Live league table for the current team set.
#[get("/api/tournament/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament() {
        Some(tournament) => HttpResponse::Ok().json(rank(&tournament.teams)),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Discard the current tournament. The roster and its lifetime stats stay.
#[delete("/api/tournament")]
async fn api_clear_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.clear_tournament();
    HttpResponse::Ok().json(serde_json::json!({ "cleared": true }))
}

/// Nudge one side's goal count on a running fixture.
#[post("/api/tournament/fixtures/{fixture_id}/score")]
async fn api_adjust_score(
    state: AppState,
    path: Path<FixturePath>,
    body: Json<AdjustScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(mut tournament) = g.tournament() else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    };
    match adjust_score(&mut tournament, path.fixture_id, body.side, body.adjustment) {
        Ok(()) => {
            g.save_tournament(&tournament);
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Finalize a fixture, applying its result to both teams.
#[post("/api/tournament/fixtures/{fixture_id}/finalize")]
async fn api_finalize_fixture(state: AppState, path: Path<FixturePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(mut tournament) = g.tournament() else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }));
    };
    match finalize_fixture(&mut tournament, path.fixture_id) {
        Ok(()) => {
            g.save_tournament(&tournament);
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
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
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Repository::new(MemoryStore::new())));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_update_player)
            .service(api_remove_player)
            .service(api_record_goal)
            .service(api_record_assist)
            .service(api_get_selection)
            .service(api_select_player)
            .service(api_deselect_player)
            .service(api_clear_selection)
            .service(api_draw_teams)
            .service(api_get_tournament)
            .service(api_start_tournament)
            .service(api_can_advance)
            .service(api_advance)
            .service(api_standings)
            .service(api_clear_tournament)
            .service(api_adjust_score)
            .service(api_finalize_fixture)
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
