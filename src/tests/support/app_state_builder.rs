use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::incoming::web::cookies::SessionCookieConfig;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    check_session::ICheckSessionUseCase, login::ILoginUseCase, logout::ILogoutUseCase,
    refresh_session::IRefreshSessionUseCase,
};
use crate::carousel::application::carousel_use_cases::CarouselUseCases;
use crate::carousel::application::ports::incoming::use_cases::{
    CreateSlideUseCase, DeleteSlideUseCase, GetSlidesUseCase, UpdateSlideUseCase,
};
use crate::email::application::contact_use_cases::ContactUseCases;
use crate::email::application::ports::incoming::send_contact_message::SendContactMessageUseCase;
use crate::event_image::application::event_image_use_cases::EventImageUseCases;
use crate::event_image::application::ports::incoming::use_cases::{
    CreateEventImageUseCase, DeleteEventImageUseCase, GetEventImagesUseCase,
    UpdateEventImageUseCase,
};
use crate::exhibition::application::exhibition_use_cases::ExhibitionUseCases;
use crate::exhibition::application::ports::incoming::use_cases::{
    CreateExhibitionUseCase, DeleteExhibitionUseCase, GetExhibitionImagesUseCase,
    GetExhibitionsUseCase, GetPublicExhibitionsUseCase, GetPublicSingleExhibitionUseCase,
    GetSingleExhibitionUseCase, ReplaceExhibitionImagesUseCase, UpdateExhibitionUseCase,
};
use crate::home::application::ports::incoming::get_home_page::GetHomePageUseCase;
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::news::application::news_use_cases::NewsUseCases;
use crate::news::application::ports::incoming::use_cases::{
    CreateNewsUseCase, DeleteNewsUseCase, GetNewsUseCase, GetPublicNewsUseCase,
    GetPublicSingleNewsUseCase, GetSingleNewsUseCase, UpdateNewsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    exhibition: ExhibitionUseCases,
    news: NewsUseCases,
    carousel: CarouselUseCases,
    event_image: EventImageUseCases,
    contact: ContactUseCases,
    home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    upload_image: Arc<dyn UploadImageUseCase + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let exhibition = Arc::new(StubExhibitionUseCases);
        let news = Arc::new(StubNewsUseCases);
        let carousel = Arc::new(StubCarouselUseCases);
        let event_image = Arc::new(StubEventImageUseCases);

        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                logout: Arc::new(StubLogoutUseCase),
                refresh: Arc::new(StubRefreshSessionUseCase),
                check: Arc::new(StubCheckSessionUseCase),
            },
            exhibition: ExhibitionUseCases {
                create: exhibition.clone(),
                get_list: exhibition.clone(),
                get_single: exhibition.clone(),
                update: exhibition.clone(),
                delete: exhibition.clone(),
                get_images: exhibition.clone(),
                replace_images: exhibition.clone(),
                get_public_list: exhibition.clone(),
                get_public_single: exhibition,
            },
            news: NewsUseCases {
                create: news.clone(),
                get_list: news.clone(),
                get_single: news.clone(),
                update: news.clone(),
                delete: news.clone(),
                get_public_list: news.clone(),
                get_public_single: news,
            },
            carousel: CarouselUseCases {
                list: carousel.clone(),
                create: carousel.clone(),
                update: carousel.clone(),
                delete: carousel,
            },
            event_image: EventImageUseCases {
                list: event_image.clone(),
                create: event_image.clone(),
                update: event_image.clone(),
                delete: event_image,
            },
            contact: ContactUseCases {
                send: Arc::new(StubSendContactMessageUseCase),
            },
            home: Arc::new(StubHomePageUseCase),
            upload_image: Arc::new(StubUploadImageUseCase),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    /* ---------------- auth ---------------- */

    pub fn with_login(mut self, uc: impl ILoginUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutUseCase + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_refresh(mut self, uc: impl IRefreshSessionUseCase + 'static) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_check_session(mut self, uc: impl ICheckSessionUseCase + 'static) -> Self {
        self.auth.check = Arc::new(uc);
        self
    }

    /* ---------------- exhibitions ---------------- */

    pub fn with_get_exhibitions(mut self, uc: impl GetExhibitionsUseCase + 'static) -> Self {
        self.exhibition.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_exhibition(mut self, uc: impl CreateExhibitionUseCase + 'static) -> Self {
        self.exhibition.create = Arc::new(uc);
        self
    }

    pub fn with_get_single_exhibition(
        mut self,
        uc: impl GetSingleExhibitionUseCase + 'static,
    ) -> Self {
        self.exhibition.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_exhibition(mut self, uc: impl UpdateExhibitionUseCase + 'static) -> Self {
        self.exhibition.update = Arc::new(uc);
        self
    }

    pub fn with_delete_exhibition(mut self, uc: impl DeleteExhibitionUseCase + 'static) -> Self {
        self.exhibition.delete = Arc::new(uc);
        self
    }

    pub fn with_get_exhibition_images(
        mut self,
        uc: impl GetExhibitionImagesUseCase + 'static,
    ) -> Self {
        self.exhibition.get_images = Arc::new(uc);
        self
    }

    pub fn with_replace_exhibition_images(
        mut self,
        uc: impl ReplaceExhibitionImagesUseCase + 'static,
    ) -> Self {
        self.exhibition.replace_images = Arc::new(uc);
        self
    }

    pub fn with_get_public_exhibitions(
        mut self,
        uc: impl GetPublicExhibitionsUseCase + 'static,
    ) -> Self {
        self.exhibition.get_public_list = Arc::new(uc);
        self
    }

    pub fn with_get_public_single_exhibition(
        mut self,
        uc: impl GetPublicSingleExhibitionUseCase + 'static,
    ) -> Self {
        self.exhibition.get_public_single = Arc::new(uc);
        self
    }

    /* ---------------- news ---------------- */

    pub fn with_get_news(mut self, uc: impl GetNewsUseCase + 'static) -> Self {
        self.news.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_news(mut self, uc: impl CreateNewsUseCase + 'static) -> Self {
        self.news.create = Arc::new(uc);
        self
    }

    pub fn with_get_single_news(mut self, uc: impl GetSingleNewsUseCase + 'static) -> Self {
        self.news.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_news(mut self, uc: impl UpdateNewsUseCase + 'static) -> Self {
        self.news.update = Arc::new(uc);
        self
    }

    pub fn with_delete_news(mut self, uc: impl DeleteNewsUseCase + 'static) -> Self {
        self.news.delete = Arc::new(uc);
        self
    }

    pub fn with_get_public_news(mut self, uc: impl GetPublicNewsUseCase + 'static) -> Self {
        self.news.get_public_list = Arc::new(uc);
        self
    }

    pub fn with_get_public_single_news(
        mut self,
        uc: impl GetPublicSingleNewsUseCase + 'static,
    ) -> Self {
        self.news.get_public_single = Arc::new(uc);
        self
    }

    /* ---------------- carousels ---------------- */

    pub fn with_get_slides(mut self, uc: impl GetSlidesUseCase + 'static) -> Self {
        self.carousel.list = Arc::new(uc);
        self
    }

    pub fn with_create_slide(mut self, uc: impl CreateSlideUseCase + 'static) -> Self {
        self.carousel.create = Arc::new(uc);
        self
    }

    pub fn with_update_slide(mut self, uc: impl UpdateSlideUseCase + 'static) -> Self {
        self.carousel.update = Arc::new(uc);
        self
    }

    pub fn with_delete_slide(mut self, uc: impl DeleteSlideUseCase + 'static) -> Self {
        self.carousel.delete = Arc::new(uc);
        self
    }

    /* ---------------- event images ---------------- */

    pub fn with_get_event_images(mut self, uc: impl GetEventImagesUseCase + 'static) -> Self {
        self.event_image.list = Arc::new(uc);
        self
    }

    pub fn with_create_event_image(mut self, uc: impl CreateEventImageUseCase + 'static) -> Self {
        self.event_image.create = Arc::new(uc);
        self
    }

    pub fn with_update_event_image(mut self, uc: impl UpdateEventImageUseCase + 'static) -> Self {
        self.event_image.update = Arc::new(uc);
        self
    }

    pub fn with_delete_event_image(mut self, uc: impl DeleteEventImageUseCase + 'static) -> Self {
        self.event_image.delete = Arc::new(uc);
        self
    }

    /* ---------------- public site and media ---------------- */

    pub fn with_home_page(mut self, uc: impl GetHomePageUseCase + 'static) -> Self {
        self.home = Arc::new(uc);
        self
    }

    pub fn with_send_contact_message(
        mut self,
        uc: impl SendContactMessageUseCase + 'static,
    ) -> Self {
        self.contact.send = Arc::new(uc);
        self
    }

    pub fn with_upload_image(mut self, uc: impl UploadImageUseCase + 'static) -> Self {
        self.upload_image = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            session_cookies: SessionCookieConfig::default(),
            exhibition: self.exhibition,
            news: self.news,
            carousel: self.carousel,
            event_image: self.event_image,
            contact: self.contact,
            home: self.home,
            upload_image: self.upload_image,
            upload_policy: self.upload_policy,
        })
    }
}
