mod error;

pub use error::ErrorBody;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{
    dev::Server, error::InternalError, get, post, web, App, HttpResponse, HttpServer, Responder,
    ResponseError,
};
use tracing::{info, warn};

use crate::application::{DriverSummaryUseCase, RaceListingUseCase};
use crate::domain::error::AppError;
use crate::domain::race::SummaryRequest;

pub struct HttpState {
    pub summary_use_case: DriverSummaryUseCase,
    pub race_listing_use_case: RaceListingUseCase,
}

#[post("/analyze")]
async fn analyze(data: web::Data<HttpState>, req: web::Json<SummaryRequest>) -> impl Responder {
    match data.summary_use_case.execute(&req) {
        Ok(summary) => {
            info!(
                driver = %summary.driver,
                race = %summary.race_file,
                "Driver summary served"
            );
            HttpResponse::Ok().json(summary)
        }
        Err(e) => {
            info!(
                driver = ?req.driver,
                race = ?req.race,
                status = e.status_code().as_u16(),
                "Driver summary rejected: {}",
                e
            );
            e.error_response()
        }
    }
}

#[get("/races")]
async fn list_races(data: web::Data<HttpState>) -> impl Responder {
    HttpResponse::Ok().json(data.race_listing_use_case.execute())
}

/// Malformed JSON bodies answer 400 with the same error shape as the
/// handlers
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected request body");
        let response =
            AppError::BadRequest(format!("Invalid JSON body: {}", err)).error_response();
        InternalError::from_response(err, response).into()
    })
}

/// Routes shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(analyze)
        .service(list_races);
}

pub fn start_server(state: HttpState, host: &str, port: u16) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run();

    info!(host, port, "HTTP server listening");

    Ok(server)
}
