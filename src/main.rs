pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::carousel;
pub use modules::email;
pub use modules::event_image;
pub use modules::exhibition;
pub use modules::home;
pub use modules::multimedia;
pub use modules::news;

use crate::auth::adapter::incoming::web::cookies::SessionCookieConfig;
use crate::auth::adapter::outgoing::identity_http::{HttpIdentityProvider, IdentityConfig};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::IdentityProvider;
use crate::auth::application::use_cases::{
    check_session::CheckSessionUseCase, login::LoginUseCase, logout::LogoutUseCase,
    refresh_session::RefreshSessionUseCase,
};

use crate::carousel::adapter::outgoing::{CarouselQueryPostgres, CarouselRepositoryPostgres};
use crate::carousel::application::carousel_use_cases::CarouselUseCases;
use crate::carousel::application::service::{
    CreateSlideService, DeleteSlideService, GetSlidesService, UpdateSlideService,
};

use crate::email::adapter::outgoing::{SmtpConfig, SmtpEmailSender};
use crate::email::application::contact_use_cases::ContactUseCases;
use crate::email::application::services::ContactMessageService;

use crate::event_image::adapter::outgoing::EventImageRepositoryPostgres;
use crate::event_image::application::event_image_use_cases::EventImageUseCases;
use crate::event_image::application::service::{
    CreateEventImageService, DeleteEventImageService, GetEventImagesService,
    UpdateEventImageService,
};

use crate::exhibition::adapter::outgoing::{ExhibitionQueryPostgres, ExhibitionRepositoryPostgres};
use crate::exhibition::application::exhibition_use_cases::ExhibitionUseCases;
use crate::exhibition::application::service::{
    CreateExhibitionService, DeleteExhibitionService, GetExhibitionImagesService,
    GetExhibitionsService, GetPublicExhibitionsService, GetPublicSingleExhibitionService,
    GetSingleExhibitionService, ReplaceExhibitionImagesService, UpdateExhibitionService,
};

use crate::home::application::ports::incoming::get_home_page::GetHomePageUseCase;
use crate::home::application::service::GetHomePageService;

use crate::multimedia::adapter::outgoing::cloudinary::{CloudinaryConfig, CloudinaryMediaHost};
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::multimedia::application::services::{spawn_media_cleanup_worker, UploadImageService};

use crate::news::adapter::outgoing::{NewsQueryPostgres, NewsRepositoryPostgres};
use crate::news::application::news_use_cases::NewsUseCases;
use crate::news::application::service::{
    CreateNewsService, DeleteNewsService, GetNewsService, GetPublicNewsService,
    GetPublicSingleNewsService, GetSingleNewsService, UpdateNewsService,
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub session_cookies: SessionCookieConfig,
    pub exhibition: ExhibitionUseCases,
    pub news: NewsUseCases,
    pub carousel: CarouselUseCases,
    pub event_image: EventImageUseCases,
    pub contact: ContactUseCases,
    pub home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub upload_image: Arc<dyn UploadImageUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

fn required_env(name: &str) -> io::Result<String> {
    env::var(name).map_err(|_| io::Error::other(format!("{name} is not set")))
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let run_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", run_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let from_email = required_env("EMAIL_FROM")?;
    let contact_recipient = required_env("CONTACT_RECIPIENT")?;

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if env::var("RUN_MIGRATIONS").is_ok_and(|v| v == "true" || v == "1") {
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Migrations failed", e))?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Identity provider
    let identity_config =
        IdentityConfig::from_env().map_err(|e| startup_error("Identity config", e))?;
    let identity_provider: Arc<dyn IdentityProvider> = Arc::new(
        HttpIdentityProvider::new(identity_config)
            .map_err(|e| startup_error("Identity client", e))?,
    );

    let auth = AuthUseCases {
        login: Arc::new(LoginUseCase::new(Arc::clone(&identity_provider))),
        logout: Arc::new(LogoutUseCase::new(Arc::clone(&identity_provider))),
        refresh: Arc::new(RefreshSessionUseCase::new(Arc::clone(&identity_provider))),
        check: Arc::new(CheckSessionUseCase::new(identity_provider)),
    };

    // Media host and the cleanup worker
    let cloudinary_config =
        CloudinaryConfig::from_env().map_err(|e| startup_error("Media host config", e))?;
    let media_host = CloudinaryMediaHost::new(cloudinary_config)
        .map_err(|e| startup_error("Media host client", e))?;

    let (cleanup, _cleanup_worker) = spawn_media_cleanup_worker(media_host.clone());
    let cleanup: Arc<dyn MediaCleanup> = Arc::new(cleanup);

    let upload_policy = UploadPolicy::from_env();
    let upload_image = UploadImageService::new(media_host, upload_policy.clone());

    // SMTP
    let smtp_config = SmtpConfig::from_env().map_err(|e| startup_error("SMTP config", e))?;
    let smtp_sender = SmtpEmailSender::from_config(&smtp_config, &from_email)
        .map_err(|e| startup_error("SMTP transport", e))?;

    // Exhibitions
    let exhibition_query = ExhibitionQueryPostgres::new(Arc::clone(&db_arc));
    let exhibition_repo = ExhibitionRepositoryPostgres::new(Arc::clone(&db_arc));

    let exhibition = ExhibitionUseCases {
        create: Arc::new(CreateExhibitionService::new(
            exhibition_query.clone(),
            exhibition_repo.clone(),
        )),
        get_list: Arc::new(GetExhibitionsService::new(exhibition_query.clone())),
        get_single: Arc::new(GetSingleExhibitionService::new(exhibition_query.clone())),
        update: Arc::new(UpdateExhibitionService::new(
            exhibition_repo.clone(),
            Arc::clone(&cleanup),
        )),
        delete: Arc::new(DeleteExhibitionService::new(
            exhibition_repo.clone(),
            Arc::clone(&cleanup),
        )),
        get_images: Arc::new(GetExhibitionImagesService::new(exhibition_query.clone())),
        replace_images: Arc::new(ReplaceExhibitionImagesService::new(
            exhibition_repo,
            Arc::clone(&cleanup),
        )),
        get_public_list: Arc::new(GetPublicExhibitionsService::new(exhibition_query.clone())),
        get_public_single: Arc::new(GetPublicSingleExhibitionService::new(exhibition_query)),
    };

    // News
    let news_query = NewsQueryPostgres::new(Arc::clone(&db_arc));
    let news_repo = NewsRepositoryPostgres::new(Arc::clone(&db_arc));

    let news = NewsUseCases {
        create: Arc::new(CreateNewsService::new(news_query.clone(), news_repo.clone())),
        get_list: Arc::new(GetNewsService::new(news_query.clone())),
        get_single: Arc::new(GetSingleNewsService::new(news_query.clone())),
        update: Arc::new(UpdateNewsService::new(news_repo.clone(), Arc::clone(&cleanup))),
        delete: Arc::new(DeleteNewsService::new(news_repo, Arc::clone(&cleanup))),
        get_public_list: Arc::new(GetPublicNewsService::new(news_query.clone())),
        get_public_single: Arc::new(GetPublicSingleNewsService::new(news_query)),
    };

    // Carousels
    let carousel_repo = CarouselRepositoryPostgres::new(Arc::clone(&db_arc));

    let carousel = CarouselUseCases {
        list: Arc::new(GetSlidesService::new(CarouselQueryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        create: Arc::new(CreateSlideService::new(carousel_repo.clone())),
        update: Arc::new(UpdateSlideService::new(
            carousel_repo.clone(),
            Arc::clone(&cleanup),
        )),
        delete: Arc::new(DeleteSlideService::new(carousel_repo, Arc::clone(&cleanup))),
    };

    // Event images
    let event_image_repo = EventImageRepositoryPostgres::new(Arc::clone(&db_arc));

    let event_image = EventImageUseCases {
        list: Arc::new(GetEventImagesService::new(event_image_repo.clone())),
        create: Arc::new(CreateEventImageService::new(event_image_repo.clone())),
        update: Arc::new(UpdateEventImageService::new(
            event_image_repo.clone(),
            Arc::clone(&cleanup),
        )),
        delete: Arc::new(DeleteEventImageService::new(event_image_repo, cleanup)),
    };

    let home = GetHomePageService::new(
        Arc::clone(&exhibition.get_public_list),
        Arc::clone(&news.get_public_list),
        Arc::clone(&carousel.list),
    );

    let contact = ContactUseCases {
        send: Arc::new(ContactMessageService::new(
            Arc::new(smtp_sender),
            contact_recipient,
        )),
    };

    let state = AppState {
        auth,
        session_cookies: SessionCookieConfig::from_env(),
        exhibition,
        news,
        carousel,
        event_image,
        contact,
        home: Arc::new(home),
        upload_image: Arc::new(upload_image),
        upload_policy,
    };

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::carousel::adapter::incoming::web::routes as carousel_routes;
    use crate::email::adapter::incoming::web::routes as contact_routes;
    use crate::event_image::adapter::incoming::web::routes as event_image_routes;
    use crate::exhibition::adapter::incoming::web::routes as exhibition_routes;
    use crate::home::adapter::incoming::web::routes as home_routes;
    use crate::multimedia::adapter::incoming::web::routes as media_routes;
    use crate::news::adapter::incoming::web::routes as news_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::login_handler);
    cfg.service(auth_routes::logout_handler);
    cfg.service(auth_routes::check_session_handler);
    cfg.service(auth_routes::refresh_session_handler);
    // Exhibitions
    cfg.service(exhibition_routes::get_exhibitions_handler);
    cfg.service(exhibition_routes::create_exhibition_handler);
    cfg.service(exhibition_routes::get_single_exhibition_handler);
    cfg.service(exhibition_routes::update_exhibition_handler);
    cfg.service(exhibition_routes::delete_exhibition_handler);
    cfg.service(exhibition_routes::get_exhibition_images_handler);
    cfg.service(exhibition_routes::replace_exhibition_images_handler);
    // News
    cfg.service(news_routes::get_news_handler);
    cfg.service(news_routes::create_news_handler);
    cfg.service(news_routes::get_single_news_handler);
    cfg.service(news_routes::update_news_handler);
    cfg.service(news_routes::delete_news_handler);
    // Carousels
    cfg.service(carousel_routes::get_carousel_handler);
    cfg.service(carousel_routes::create_carousel_slide_handler);
    cfg.service(carousel_routes::update_carousel_slide_handler);
    cfg.service(carousel_routes::delete_carousel_slide_handler);
    cfg.service(carousel_routes::get_carousel_mobile_handler);
    cfg.service(carousel_routes::create_carousel_mobile_slide_handler);
    cfg.service(carousel_routes::update_carousel_mobile_slide_handler);
    cfg.service(carousel_routes::delete_carousel_mobile_slide_handler);
    // Event images
    cfg.service(event_image_routes::get_event_images_handler);
    cfg.service(event_image_routes::create_event_image_handler);
    cfg.service(event_image_routes::update_event_image_handler);
    cfg.service(event_image_routes::delete_event_image_handler);
    // Media
    cfg.service(media_routes::upload_image_handler);
    // Public site
    cfg.service(home_routes::get_home_page_handler);
    cfg.service(exhibition_routes::get_public_exhibitions_handler);
    cfg.service(exhibition_routes::get_public_single_exhibition_handler);
    cfg.service(news_routes::get_public_news_handler);
    cfg.service(news_routes::get_public_single_news_handler);
    cfg.service(contact_routes::send_contact_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
