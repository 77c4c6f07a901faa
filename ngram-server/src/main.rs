use std::env;

use actix_cors::Cors;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, Responder};

use log::{info, warn};

use serde::{Deserialize, Serialize};
use ngram_core::{extract, extract_paired, for_each_window, NGramError, Window};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Struct representing query parameters for the `/v1/extract` endpoint
#[derive(Deserialize)]
struct ExtractParams {
	text: String,
	len: usize,
}

/// Struct representing query parameters for the `/v1/extract_paired` endpoint
#[derive(Deserialize)]
struct PairedParams {
	text: String,
	len_a: usize,
	len_b: usize,
}

/// Body of `/v1/extract_lines`: the lines to process and the window to apply.
#[derive(Serialize, Deserialize)]
struct LinesBody {
	lines: Vec<String>,
	window: Window,
}

#[derive(Serialize, Deserialize, Debug)]
struct NGramsResponse {
	ngrams: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct LinesResponse {
	results: Vec<Vec<String>>,
}

/// Bind address, read from `NGRAM_SERVER_HOST` / `NGRAM_SERVER_PORT`.
#[derive(Debug, PartialEq)]
struct ServerConfig {
	host: String,
	port: u16,
}

impl ServerConfig {
	fn from_env() -> Result<Self, String> {
		Self::from_vars(env::var("NGRAM_SERVER_HOST").ok(), env::var("NGRAM_SERVER_PORT").ok())
	}

	/// Builds the config from raw variable values, falling back to defaults.
	fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, String> {
		let port = match port {
			Some(p) => p.trim().parse().map_err(|_| format!("Invalid NGRAM_SERVER_PORT: {p}"))?,
			None => DEFAULT_PORT,
		};
		let host = host.filter(|h| !h.trim().is_empty()).unwrap_or_else(|| DEFAULT_HOST.to_owned());
		Ok(Self { host, port })
	}
}

/// Maps an extraction error to a response: bad lengths are the caller's fault.
fn error_response(e: NGramError) -> HttpResponse {
	match e {
		NGramError::InvalidArgument(_) => {
			warn!("rejected request: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/extract`
///
/// Returns every `len`-character window of `text`.
#[get("/v1/extract")]
async fn get_extract(query: web::Query<ExtractParams>) -> impl Responder {
	match extract(&query.text, query.len) {
		Ok(ngrams) => HttpResponse::Ok().json(NGramsResponse { ngrams }),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/extract_paired`
///
/// Returns the alternating `len_a` / `len_b` pairs of `text`, flattened.
#[get("/v1/extract_paired")]
async fn get_extract_paired(query: web::Query<PairedParams>) -> impl Responder {
	match extract_paired(&query.text, query.len_a, query.len_b) {
		Ok(ngrams) => HttpResponse::Ok().json(NGramsResponse { ngrams }),
		Err(e) => error_response(e),
	}
}

/// HTTP POST endpoint `/v1/extract_lines`
///
/// Applies the window to each line, one result array per line, in order.
#[post("/v1/extract_lines")]
async fn post_extract_lines(body: web::Json<LinesBody>) -> impl Responder {
	let mut results = Vec::with_capacity(body.lines.len());
	let outcome = for_each_window(&body.lines, &body.window, |grams| results.push(grams));

	match outcome {
		Ok(()) => HttpResponse::Ok().json(LinesResponse { results }),
		Err(e) => error_response(e),
	}
}

/// Registers every endpoint. Shared by `main` and the tests.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_extract)
		.service(get_extract_paired)
		.service(post_extract_lines);
}

/// Main entry point for the server.
///
/// Reads the bind address from the environment and starts an Actix-web
/// HTTP server. Extraction is stateless, so no shared data is registered.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = ServerConfig::from_env()
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	info!("listening on {}:{}", config.host, config.port);

	HttpServer::new(|| {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
