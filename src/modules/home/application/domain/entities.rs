use serde::Serialize;
use utoipa::ToSchema;

use crate::carousel::application::domain::entities::CarouselSlide;
use crate::exhibition::application::domain::entities::ExhibitionCard;
use crate::news::application::domain::entities::NewsCard;

/// Everything the public landing page renders in one response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomePage {
    pub current_exhibition: Option<ExhibitionCard>,
    pub headline_news: Option<NewsCard>,
    pub carousel: Vec<CarouselSlide>,
    pub carousel_mobile: Vec<CarouselSlide>,
}
