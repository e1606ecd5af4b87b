use std::sync::Arc;

use async_trait::async_trait;

use crate::carousel::application::domain::entities::SlideDeck;
use crate::carousel::application::ports::incoming::use_cases::GetSlidesUseCase;
use crate::exhibition::application::ports::incoming::use_cases::GetPublicExhibitionsUseCase;
use crate::home::application::domain::entities::HomePage;
use crate::home::application::ports::incoming::get_home_page::{
    GetHomePageError, GetHomePageUseCase,
};
use crate::news::application::ports::incoming::use_cases::GetPublicNewsUseCase;

/// Composes the public read use cases; the four reads run concurrently.
pub struct GetHomePageService {
    exhibitions: Arc<dyn GetPublicExhibitionsUseCase + Send + Sync>,
    news: Arc<dyn GetPublicNewsUseCase + Send + Sync>,
    slides: Arc<dyn GetSlidesUseCase + Send + Sync>,
}

impl GetHomePageService {
    pub fn new(
        exhibitions: Arc<dyn GetPublicExhibitionsUseCase + Send + Sync>,
        news: Arc<dyn GetPublicNewsUseCase + Send + Sync>,
        slides: Arc<dyn GetSlidesUseCase + Send + Sync>,
    ) -> Self {
        Self {
            exhibitions,
            news,
            slides,
        }
    }
}

fn repo_err(e: impl std::fmt::Display) -> GetHomePageError {
    GetHomePageError::RepositoryError(e.to_string())
}

#[async_trait]
impl GetHomePageUseCase for GetHomePageService {
    async fn execute(&self) -> Result<HomePage, GetHomePageError> {
        let (exhibitions, news, carousel, carousel_mobile) = futures::try_join!(
            async { self.exhibitions.execute().await.map_err(repo_err) },
            async { self.news.execute().await.map_err(repo_err) },
            async { self.slides.execute(SlideDeck::Desktop).await.map_err(repo_err) },
            async { self.slides.execute(SlideDeck::Mobile).await.map_err(repo_err) },
        )?;

        Ok(HomePage {
            current_exhibition: exhibitions.current,
            headline_news: news.headline,
            carousel,
            carousel_mobile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::application::domain::entities::fixtures::slide;
    use crate::carousel::application::domain::entities::CarouselSlide;
    use crate::carousel::application::ports::incoming::use_cases::GetSlidesError;
    use crate::exhibition::application::domain::entities::fixtures::exhibition;
    use crate::exhibition::application::domain::entities::PublicExhibitionList;
    use crate::exhibition::application::ports::incoming::use_cases::GetPublicExhibitionsError;
    use crate::news::application::domain::entities::PublicNewsList;
    use crate::news::application::ports::incoming::use_cases::GetPublicNewsError;
    use crate::shared::position::Position;

    struct Exhibitions;

    #[async_trait]
    impl GetPublicExhibitionsUseCase for Exhibitions {
        async fn execute(&self) -> Result<PublicExhibitionList, GetPublicExhibitionsError> {
            Ok(PublicExhibitionList::from_exhibitions(vec![
                exhibition("Now", Position::Current),
                exhibition("Before", Position::Past(2)),
            ]))
        }
    }

    struct NoNews;

    #[async_trait]
    impl GetPublicNewsUseCase for NoNews {
        async fn execute(&self) -> Result<PublicNewsList, GetPublicNewsError> {
            Ok(PublicNewsList::from_items(vec![]))
        }
    }

    struct Slides {
        fail: bool,
    }

    #[async_trait]
    impl GetSlidesUseCase for Slides {
        async fn execute(&self, deck: SlideDeck) -> Result<Vec<CarouselSlide>, GetSlidesError> {
            if self.fail {
                return Err(GetSlidesError::RepositoryError("down".into()));
            }
            Ok(vec![slide(deck.table_name(), 0)])
        }
    }

    #[tokio::test]
    async fn test_home_page_combines_reads() {
        let service =
            GetHomePageService::new(Arc::new(Exhibitions), Arc::new(NoNews), Arc::new(Slides { fail: false }));

        let page = service.execute().await.unwrap();

        assert_eq!(page.current_exhibition.unwrap().title, "Now");
        assert!(page.headline_news.is_none());
        assert_eq!(page.carousel[0].image_url, "carousel_slides");
        assert_eq!(page.carousel_mobile[0].image_url, "carousel_mobile_slides");
    }

    #[tokio::test]
    async fn test_any_failed_read_fails_the_page() {
        let service =
            GetHomePageService::new(Arc::new(Exhibitions), Arc::new(NoNews), Arc::new(Slides { fail: true }));

        let err = service.execute().await.unwrap_err();
        assert!(matches!(err, GetHomePageError::RepositoryError(msg) if msg.contains("down")));
    }
}
