//! Development server: serves the built frontend from `./dist` and stands in
//! for the simulation backend by replaying a fixture snapshot on `/simulate`.

use actix_files::Files;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use corridor_graph::client::{parse_block_list, parse_speed_up};
use corridor_graph::models::{Infrastructure, SimulationSnapshot};
use serde::Deserialize;
use std::env;

const DEFAULT_FIXTURE: &str = "./fixtures/snapshot.json";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SimulateQuery {
    auto_blocks: String,
    loops: String,
    speed_up: String,
}

impl SimulateQuery {
    fn infrastructure(&self) -> Infrastructure {
        Infrastructure {
            auto_blocks: parse_block_list(&self.auto_blocks).unwrap_or_default(),
            loop_stations: parse_block_list(&self.loops).unwrap_or_default(),
            speed_up_blocks: parse_speed_up(&self.speed_up).unwrap_or_default(),
        }
    }
}

#[get("/simulate")]
async fn simulate(
    fixture: web::Data<SimulationSnapshot>,
    query: web::Query<SimulateQuery>,
) -> impl Responder {
    let mut snapshot = fixture.get_ref().clone();
    snapshot.infrastructure = query.infrastructure();
    log::info!(
        "Replaying {} trains for auto_blocks={:?} loops={:?}",
        snapshot.trains.len(),
        snapshot.infrastructure.auto_blocks,
        snapshot.infrastructure.loop_stations,
    );
    HttpResponse::Ok().json(snapshot)
}

fn load_fixture(path: &str) -> std::io::Result<SimulationSnapshot> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8000, where the client looks by default
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let fixture_path = env::var("SNAPSHOT_FIXTURE").unwrap_or_else(|_| DEFAULT_FIXTURE.to_string());
    let fixture = web::Data::new(load_fixture(&fixture_path)?);

    log::info!("Starting server on 0.0.0.0:{port} with fixture {fixture_path}");

    HttpServer::new(move || {
        App::new()
            .app_data(fixture.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(simulate)
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
