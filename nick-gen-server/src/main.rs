use std::env;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware, web};
use log::{info, warn};
use serde::Deserialize;

use nick_gen_core::error::InventoryError;
use nick_gen_core::model::forge::{DEFAULT_INVENTORY, Forge};
use nick_gen_core::model::generation_input::GenerationInput;

/// Upper bound of names returned by a single request.
const MAX_COUNT: usize = 100;

/// Upper bound of candidates scored per name in a single request.
const MAX_ATTEMPTS: usize = 100;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	inventory: Option<String>,
	count: Option<usize>,
	attempts: Option<usize>,
	suffix_probability: Option<f64>,
}

impl GenerateParams {
	/// Builds the generation settings, starting from the inventory's own.
	fn generation_input(&self, base: &GenerationInput) -> Result<GenerationInput, String> {
		let mut input = base.clone();
		if let Some(attempts) = self.attempts {
			if attempts > MAX_ATTEMPTS {
				return Err(format!("attempts must be at most {MAX_ATTEMPTS}, got {attempts}"));
			}
			input.set_attempts(attempts).map_err(|e| e.to_string())?;
		}
		if let Some(probability) = self.suffix_probability {
			input.set_suffix_probability(probability).map_err(|e| e.to_string())?;
		}
		Ok(input)
	}

	fn count(&self) -> Result<usize, String> {
		match self.count.unwrap_or(1) {
			n if (1..=MAX_COUNT).contains(&n) => Ok(n),
			n => Err(format!("count must be between 1 and {MAX_COUNT}, got {n}")),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` names from the requested inventory.
/// Returns the names separated by newlines.
#[get("/v1/generate")]
async fn get_generated(forge: web::Data<Forge>, query: web::Query<GenerateParams>) -> impl Responder {
	let name = query.inventory.as_deref().unwrap_or(DEFAULT_INVENTORY);
	let generator = match forge.get(name) {
		Some(g) => g,
		None => return HttpResponse::NotFound().body(InventoryError::Unknown(name.to_owned()).to_string()),
	};

	let count = match query.count() {
		Ok(n) => n,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let input = match query.generation_input(generator.input()) {
		Ok(i) => i,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mut rng = rand::rng();
	let names: Vec<String> = (0..count)
		.map(|_| generator.generate_tuned_with(&input, &mut rng).name)
		.collect();

	HttpResponse::Ok().body(names.join("\n"))
}

/// HTTP GET endpoint `/v1/inventories`
///
/// Lists the loaded inventory names, one per line.
#[get("/v1/inventories")]
async fn get_inventories(forge: web::Data<Forge>) -> impl Responder {
	HttpResponse::Ok().body(forge.names().join("\n"))
}

/// Loads the inventories, falling back to the built-in one alone when the
/// data directory is missing.
fn load_forge(data_dir: &str) -> Result<Forge, InventoryError> {
	match Forge::new(data_dir) {
		Ok(forge) => Ok(forge),
		Err(InventoryError::NotADirectory(path)) => {
			warn!("No inventory directory at {}, serving the built-in inventory only", path.display());
			Ok(Forge::default())
		}
		Err(e) => Err(e),
	}
}

/// Main entry point for the server.
///
/// Loads the inventories once; the forge is immutable afterwards, so it is
/// shared between workers without a lock.
///
/// # Environment
/// - `NICK_GEN_ADDR`: bind address (default `127.0.0.1`)
/// - `NICK_GEN_PORT`: bind port (default `5000`)
/// - `NICK_GEN_DATA`: inventory directory (default `./data`)
/// - `RUST_LOG`: log filter (default `info`)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let addr = env::var("NICK_GEN_ADDR").unwrap_or_else(|_| "127.0.0.1".to_owned());
	let port = match env::var("NICK_GEN_PORT") {
		Ok(p) => p.parse::<u16>().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?,
		Err(_) => 5000,
	};
	let data_dir = env::var("NICK_GEN_DATA").unwrap_or_else(|_| "./data".to_owned());

	let forge = load_forge(&data_dir).map_err(std::io::Error::other)?;
	let forge = web::Data::new(forge);

	info!("Listening on {}:{}", addr, port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.app_data(forge.clone())
			.service(get_generated)
			.service(get_inventories)
	})
		.bind((addr.as_str(), port))?
		.run()
		.await
}
