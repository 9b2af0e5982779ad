use crate::error::ApiError;
use crate::service::{OptionsService, Recommendation, RecommendationService};
use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub manufacturer: String,
    pub model_name: String,
    pub category: String,
}

#[derive(Serialize)]
struct RecommendResponse {
    recommendations: Vec<Recommendation>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        recommender: RecommendationService,
        options: OptionsService,
        host: &str,
        port: u16,
    ) -> std::io::Result<()> {
        let recommender = web::Data::new(recommender);
        let options = web::Data::new(options);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .wrap(NormalizePath::new(TrailingSlash::Always))
                .wrap(Logger::default())
                .app_data(recommender.clone())
                .app_data(options.clone())
                .configure(configure)
        })
        .bind((host, port))?
        .run()
        .await
    }
}

/// Register the `/api` routes. Expects `web::Data` for both services.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .service(
                web::resource("/recommend/")
                    .route(web::post().to(recommend))
                    .default_service(web::to(post_required)),
            )
            .service(
                web::resource("/options/")
                    .route(web::get().to(options))
                    .default_service(web::to(get_required)),
            )
            .service(
                web::resource("/purposes/")
                    .route(web::get().to(purposes))
                    .default_service(web::to(get_required)),
            ),
    );
}

async fn recommend(
    service: web::Data<RecommendationService>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let recommendations = service.recommend(&req.manufacturer, &req.model_name, &req.category)?;
    Ok(HttpResponse::Ok().json(RecommendResponse { recommendations }))
}

async fn options(service: web::Data<OptionsService>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(service.list_options()))
}

async fn purposes(service: web::Data<OptionsService>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "purposes": service.list_purposes()
    })))
}

async fn post_required() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed("POST"))
}

async fn get_required() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed("GET"))
}
