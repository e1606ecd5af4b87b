use crate::api::schemas::{DeletedResponse, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LogoutResponseBody, SessionStatusResponse, SessionUserResponse,
};
use crate::auth::application::domain::entities::AdminIdentity;

// Content
use crate::carousel::adapter::incoming::web::routes::{CreateSlideRequest, UpdateSlideRequest};
use crate::carousel::application::domain::entities::CarouselSlide;
use crate::email::adapter::incoming::web::routes::{ContactAccepted, ContactRequest};
use crate::event_image::adapter::incoming::web::routes::{
    CreateEventImageRequest, UpdateEventImageRequest,
};
use crate::event_image::application::domain::entities::EventImage;
use crate::exhibition::adapter::incoming::web::routes::{
    CreateExhibitionRequest, ReplaceExhibitionImagesRequest, UpdateExhibitionRequest,
};
use crate::exhibition::application::domain::entities::{
    Exhibition, ExhibitionCard, ExhibitionDetail, ExhibitionImage, PublicExhibitionDetail,
    PublicExhibitionList,
};
use crate::health::{HealthResponse, ReadinessResponse};
use crate::home::application::domain::entities::HomePage;
use crate::multimedia::application::domain::entities::UploadedImage;
use crate::news::adapter::incoming::web::routes::{CreateNewsRequest, UpdateNewsRequest};
use crate::news::application::domain::entities::{NewsCard, NewsItem, PublicNewsList};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery CMS API",
        version = "1.0.0",
        description = "Admin and public API for the gallery website: exhibitions, news, carousels, event images and media uploads",
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,
        crate::auth::adapter::incoming::web::routes::check_session_handler,
        crate::auth::adapter::incoming::web::routes::refresh_session_handler,

        // Exhibitions
        crate::exhibition::adapter::incoming::web::routes::get_exhibitions_handler,
        crate::exhibition::adapter::incoming::web::routes::create_exhibition_handler,
        crate::exhibition::adapter::incoming::web::routes::get_single_exhibition_handler,
        crate::exhibition::adapter::incoming::web::routes::update_exhibition_handler,
        crate::exhibition::adapter::incoming::web::routes::delete_exhibition_handler,
        crate::exhibition::adapter::incoming::web::routes::get_exhibition_images_handler,
        crate::exhibition::adapter::incoming::web::routes::replace_exhibition_images_handler,

        // News
        crate::news::adapter::incoming::web::routes::get_news_handler,
        crate::news::adapter::incoming::web::routes::create_news_handler,
        crate::news::adapter::incoming::web::routes::get_single_news_handler,
        crate::news::adapter::incoming::web::routes::update_news_handler,
        crate::news::adapter::incoming::web::routes::delete_news_handler,

        // Carousels
        crate::carousel::adapter::incoming::web::routes::get_carousel_handler,
        crate::carousel::adapter::incoming::web::routes::create_carousel_slide_handler,
        crate::carousel::adapter::incoming::web::routes::update_carousel_slide_handler,
        crate::carousel::adapter::incoming::web::routes::delete_carousel_slide_handler,
        crate::carousel::adapter::incoming::web::routes::get_carousel_mobile_handler,
        crate::carousel::adapter::incoming::web::routes::create_carousel_mobile_slide_handler,
        crate::carousel::adapter::incoming::web::routes::update_carousel_mobile_slide_handler,
        crate::carousel::adapter::incoming::web::routes::delete_carousel_mobile_slide_handler,

        // Event images
        crate::event_image::adapter::incoming::web::routes::get_event_images_handler,
        crate::event_image::adapter::incoming::web::routes::create_event_image_handler,
        crate::event_image::adapter::incoming::web::routes::update_event_image_handler,
        crate::event_image::adapter::incoming::web::routes::delete_event_image_handler,

        // Media
        crate::multimedia::adapter::incoming::web::routes::upload_image_handler,

        // Public site
        crate::home::adapter::incoming::web::routes::get_home_page_handler,
        crate::exhibition::adapter::incoming::web::routes::get_public_exhibitions_handler,
        crate::exhibition::adapter::incoming::web::routes::get_public_single_exhibition_handler,
        crate::news::adapter::incoming::web::routes::get_public_news_handler,
        crate::news::adapter::incoming::web::routes::get_public_single_news_handler,
        crate::email::adapter::incoming::web::routes::send_contact_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            DeletedResponse,
            HealthResponse,
            ReadinessResponse,

            // Auth
            LoginRequestDto,
            SessionUserResponse,
            SessionStatusResponse,
            LogoutResponseBody,
            AdminIdentity,

            // Exhibitions
            CreateExhibitionRequest,
            UpdateExhibitionRequest,
            ReplaceExhibitionImagesRequest,
            Exhibition,
            ExhibitionImage,
            ExhibitionDetail,
            ExhibitionCard,
            PublicExhibitionList,
            PublicExhibitionDetail,

            // News
            CreateNewsRequest,
            UpdateNewsRequest,
            NewsItem,
            NewsCard,
            PublicNewsList,

            // Carousels and event images
            CreateSlideRequest,
            UpdateSlideRequest,
            CarouselSlide,
            CreateEventImageRequest,
            UpdateEventImageRequest,
            EventImage,

            // Media, home and contact
            UploadedImage,
            HomePage,
            ContactRequest,
            ContactAccepted,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Admin session endpoints"),
        (name = "exhibitions", description = "Exhibition management"),
        (name = "news", description = "News management"),
        (name = "carousel", description = "Desktop and mobile carousel slides"),
        (name = "event-images", description = "Event image strip"),
        (name = "media", description = "Image uploads"),
        (name = "public", description = "Unauthenticated endpoints used by the public site"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    crate::auth::adapter::incoming::web::cookies::ACCESS_TOKEN_COOKIE,
                ))),
            );
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Access token issued by the identity provider"))
                        .build(),
                ),
            )
        }
    }
}
