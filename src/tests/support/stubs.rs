use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AdminIdentity, Session, SessionStatus};
use crate::auth::application::use_cases::{
    check_session::ICheckSessionUseCase,
    login::{ILoginUseCase, LoginError, LoginRequest},
    logout::ILogoutUseCase,
    refresh_session::{IRefreshSessionUseCase, RefreshSessionError},
};
use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::carousel::application::ports::incoming::use_cases::{
    CreateSlideCommand, CreateSlideError, CreateSlideUseCase, DeleteSlideError,
    DeleteSlideUseCase, GetSlidesError, GetSlidesUseCase, UpdateSlideError, UpdateSlideUseCase,
};
use crate::carousel::application::ports::outgoing::carousel_repository::PatchSlideData;
use crate::email::application::ports::incoming::send_contact_message::{
    ContactMessage, SendContactMessageError, SendContactMessageUseCase,
};
use crate::event_image::application::domain::entities::EventImage;
use crate::event_image::application::ports::incoming::use_cases::{
    CreateEventImageCommand, CreateEventImageError, CreateEventImageUseCase,
    DeleteEventImageError, DeleteEventImageUseCase, GetEventImagesError, GetEventImagesUseCase,
    UpdateEventImageError, UpdateEventImageUseCase,
};
use crate::event_image::application::ports::outgoing::event_image_repository::PatchEventImageData;
use crate::exhibition::application::domain::entities::{
    Exhibition, ExhibitionDetail, ExhibitionImage, PublicExhibitionDetail, PublicExhibitionList,
};
use crate::exhibition::application::ports::incoming::use_cases::{
    CreateExhibitionCommand, CreateExhibitionError, CreateExhibitionUseCase,
    DeleteExhibitionError, DeleteExhibitionUseCase, GetExhibitionImagesError,
    GetExhibitionImagesUseCase, GetExhibitionsError, GetExhibitionsUseCase,
    GetPublicExhibitionsError, GetPublicExhibitionsUseCase, GetPublicSingleExhibitionError,
    GetPublicSingleExhibitionUseCase, GetSingleExhibitionError, GetSingleExhibitionUseCase,
    ReplaceExhibitionImagesError, ReplaceExhibitionImagesUseCase, UpdateExhibitionError,
    UpdateExhibitionUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_repository::PatchExhibitionData;
use crate::home::application::domain::entities::HomePage;
use crate::home::application::ports::incoming::get_home_page::{
    GetHomePageError, GetHomePageUseCase,
};
use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};
use crate::multimedia::application::ports::incoming::use_cases::{
    UploadImageError, UploadImageUseCase,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::news::application::domain::entities::{NewsItem, PublicNewsList};
use crate::news::application::ports::incoming::use_cases::{
    CreateNewsCommand, CreateNewsError, CreateNewsUseCase, DeleteNewsError, DeleteNewsUseCase,
    GetNewsError, GetNewsUseCase, GetPublicNewsError, GetPublicNewsUseCase,
    GetPublicSingleNewsError, GetPublicSingleNewsUseCase, GetSingleNewsError,
    GetSingleNewsUseCase, UpdateNewsError, UpdateNewsUseCase,
};
use crate::news::application::ports::outgoing::news_repository::PatchNewsData;
use crate::tests::support::auth_helper::{TEST_ADMIN_ID, VALID_ADMIN_TOKEN};

const UNUSED: &str = "not used in this test";

/* --------------------------------------------------
 * Media cleanup
 * -------------------------------------------------- */

/// Records every batch instead of talking to the media host.
#[derive(Clone, Default)]
pub struct RecordingMediaCleanup {
    batches: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingMediaCleanup {
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    /// All scheduled URLs, flattened in scheduling order.
    pub fn scheduled(&self) -> Vec<String> {
        self.batches().into_iter().flatten().collect()
    }
}

impl MediaCleanup for RecordingMediaCleanup {
    fn schedule(&self, urls: Vec<String>) {
        self.batches.lock().unwrap().push(urls);
    }
}

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

pub fn test_admin() -> AdminIdentity {
    AdminIdentity {
        id: TEST_ADMIN_ID.to_string(),
        email: Some("curator@gallery.example".to_string()),
    }
}

/// Accepts `VALID_ADMIN_TOKEN` and nothing else.
pub struct StubCheckSessionUseCase;

#[async_trait]
impl ICheckSessionUseCase for StubCheckSessionUseCase {
    async fn execute(&self, access_token: &str) -> SessionStatus {
        if access_token == VALID_ADMIN_TOKEN {
            SessionStatus::Authenticated(test_admin())
        } else {
            SessionStatus::Anonymous
        }
    }
}

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<Session, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _access_token: Option<&str>) {}
}

pub struct StubRefreshSessionUseCase;

#[async_trait]
impl IRefreshSessionUseCase for StubRefreshSessionUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<Session, RefreshSessionError> {
        Err(RefreshSessionError::InvalidSession)
    }
}

/* --------------------------------------------------
 * Content: reads are empty, writes fail
 * -------------------------------------------------- */

pub struct StubExhibitionUseCases;

#[async_trait]
impl CreateExhibitionUseCase for StubExhibitionUseCases {
    async fn execute(
        &self,
        _command: CreateExhibitionCommand,
    ) -> Result<ExhibitionDetail, CreateExhibitionError> {
        Err(CreateExhibitionError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl GetExhibitionsUseCase for StubExhibitionUseCases {
    async fn execute(&self) -> Result<Vec<Exhibition>, GetExhibitionsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetSingleExhibitionUseCase for StubExhibitionUseCases {
    async fn execute(&self, _id: Uuid) -> Result<ExhibitionDetail, GetSingleExhibitionError> {
        Err(GetSingleExhibitionError::NotFound)
    }
}

#[async_trait]
impl UpdateExhibitionUseCase for StubExhibitionUseCases {
    async fn execute(
        &self,
        _id: Uuid,
        _data: PatchExhibitionData,
    ) -> Result<ExhibitionDetail, UpdateExhibitionError> {
        Err(UpdateExhibitionError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteExhibitionUseCase for StubExhibitionUseCases {
    async fn execute(&self, _id: Uuid) -> Result<Uuid, DeleteExhibitionError> {
        Err(DeleteExhibitionError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl GetExhibitionImagesUseCase for StubExhibitionUseCases {
    async fn execute(
        &self,
        _exhibition_id: Uuid,
    ) -> Result<Vec<ExhibitionImage>, GetExhibitionImagesError> {
        Err(GetExhibitionImagesError::NotFound)
    }
}

#[async_trait]
impl ReplaceExhibitionImagesUseCase for StubExhibitionUseCases {
    async fn execute(
        &self,
        _exhibition_id: Uuid,
        _urls: Vec<String>,
    ) -> Result<Vec<ExhibitionImage>, ReplaceExhibitionImagesError> {
        Err(ReplaceExhibitionImagesError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl GetPublicExhibitionsUseCase for StubExhibitionUseCases {
    async fn execute(&self) -> Result<PublicExhibitionList, GetPublicExhibitionsError> {
        Ok(PublicExhibitionList::from_exhibitions(vec![]))
    }
}

#[async_trait]
impl GetPublicSingleExhibitionUseCase for StubExhibitionUseCases {
    async fn execute(
        &self,
        _slug: &str,
    ) -> Result<PublicExhibitionDetail, GetPublicSingleExhibitionError> {
        Err(GetPublicSingleExhibitionError::NotFound)
    }
}

pub struct StubNewsUseCases;

#[async_trait]
impl CreateNewsUseCase for StubNewsUseCases {
    async fn execute(&self, _command: CreateNewsCommand) -> Result<NewsItem, CreateNewsError> {
        Err(CreateNewsError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl GetNewsUseCase for StubNewsUseCases {
    async fn execute(&self) -> Result<Vec<NewsItem>, GetNewsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetSingleNewsUseCase for StubNewsUseCases {
    async fn execute(&self, _id: Uuid) -> Result<NewsItem, GetSingleNewsError> {
        Err(GetSingleNewsError::NotFound)
    }
}

#[async_trait]
impl UpdateNewsUseCase for StubNewsUseCases {
    async fn execute(&self, _id: Uuid, _data: PatchNewsData) -> Result<NewsItem, UpdateNewsError> {
        Err(UpdateNewsError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteNewsUseCase for StubNewsUseCases {
    async fn execute(&self, _id: Uuid) -> Result<Uuid, DeleteNewsError> {
        Err(DeleteNewsError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl GetPublicNewsUseCase for StubNewsUseCases {
    async fn execute(&self) -> Result<PublicNewsList, GetPublicNewsError> {
        Ok(PublicNewsList::from_items(vec![]))
    }
}

#[async_trait]
impl GetPublicSingleNewsUseCase for StubNewsUseCases {
    async fn execute(&self, _slug: &str) -> Result<NewsItem, GetPublicSingleNewsError> {
        Err(GetPublicSingleNewsError::NotFound)
    }
}

pub struct StubCarouselUseCases;

#[async_trait]
impl GetSlidesUseCase for StubCarouselUseCases {
    async fn execute(&self, _deck: SlideDeck) -> Result<Vec<CarouselSlide>, GetSlidesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateSlideUseCase for StubCarouselUseCases {
    async fn execute(
        &self,
        _deck: SlideDeck,
        _command: CreateSlideCommand,
    ) -> Result<CarouselSlide, CreateSlideError> {
        Err(CreateSlideError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl UpdateSlideUseCase for StubCarouselUseCases {
    async fn execute(
        &self,
        _deck: SlideDeck,
        _id: Uuid,
        _data: PatchSlideData,
    ) -> Result<CarouselSlide, UpdateSlideError> {
        Err(UpdateSlideError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteSlideUseCase for StubCarouselUseCases {
    async fn execute(&self, _deck: SlideDeck, _id: Uuid) -> Result<Uuid, DeleteSlideError> {
        Err(DeleteSlideError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubEventImageUseCases;

#[async_trait]
impl GetEventImagesUseCase for StubEventImageUseCases {
    async fn execute(&self) -> Result<Vec<EventImage>, GetEventImagesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateEventImageUseCase for StubEventImageUseCases {
    async fn execute(
        &self,
        _command: CreateEventImageCommand,
    ) -> Result<EventImage, CreateEventImageError> {
        Err(CreateEventImageError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl UpdateEventImageUseCase for StubEventImageUseCases {
    async fn execute(
        &self,
        _id: Uuid,
        _data: PatchEventImageData,
    ) -> Result<EventImage, UpdateEventImageError> {
        Err(UpdateEventImageError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteEventImageUseCase for StubEventImageUseCases {
    async fn execute(&self, _id: Uuid) -> Result<Uuid, DeleteEventImageError> {
        Err(DeleteEventImageError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubHomePageUseCase;

#[async_trait]
impl GetHomePageUseCase for StubHomePageUseCase {
    async fn execute(&self) -> Result<HomePage, GetHomePageError> {
        Ok(HomePage {
            current_exhibition: None,
            headline_news: None,
            carousel: vec![],
            carousel_mobile: vec![],
        })
    }
}

/* --------------------------------------------------
 * Outbound services
 * -------------------------------------------------- */

pub struct StubSendContactMessageUseCase;

#[async_trait]
impl SendContactMessageUseCase for StubSendContactMessageUseCase {
    async fn execute(&self, _message: ContactMessage) -> Result<(), SendContactMessageError> {
        Err(SendContactMessageError::DeliveryFailed(UNUSED.into()))
    }
}

pub struct StubUploadImageUseCase;

#[async_trait]
impl UploadImageUseCase for StubUploadImageUseCase {
    async fn execute(&self, _upload: ImageUpload) -> Result<UploadedImage, UploadImageError> {
        Err(UploadImageError::HostError(UNUSED.into()))
    }
}
