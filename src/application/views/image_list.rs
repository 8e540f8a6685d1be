use async_trait::async_trait;

use super::dependency_set_view::dependency_table;
use super::paged_list::{PageSource, PagedList};
use crate::application::read_models::{Cell, Section};
use crate::application::routes::Route;
use crate::application::view_state::ListQuery;
use crate::ports::outbound::ImageApi;
use crate::rebuild_tracking::domain::{Image, Page};
use crate::rebuild_tracking::policies::StatusLabels;
use crate::shared::error::ConsoleError;
use crate::shared::Result;

pub const NO_JAVA: &str = "No Java";

/// Image repositories known to the service.
pub struct ImageRepositorySource<A> {
    api: A,
}

impl<A> ImageRepositorySource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: ImageApi> PageSource for ImageRepositorySource<A> {
    type Filter = ();
    type Item = String;

    fn title(&self) -> String {
        "Image Repositories".to_string()
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Image Repository"]
    }

    fn row(&self, repository: &String) -> Vec<Cell> {
        vec![Cell::link_or_text(
            repository.clone(),
            Some(Route::Images(repository.clone()).path()),
        )]
    }

    async fn fetch(&self, query: &ListQuery<()>) -> Result<Page<String>> {
        self.api.image_repositories(query.page).await
    }
}

/// Analysed images of one repository, with their dependency health.
pub struct ImageSource<A> {
    api: A,
    repository: String,
}

impl<A> ImageSource<A> {
    pub fn new(api: A, repository: impl Into<String>) -> Self {
        Self {
            api,
            repository: repository.into(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }
}

#[async_trait]
impl<A: ImageApi> PageSource for ImageSource<A> {
    type Filter = ();
    type Item = Image;

    fn title(&self) -> String {
        format!("Images of {}", self.repository)
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Image", "Health"]
    }

    fn row(&self, image: &Image) -> Vec<Cell> {
        vec![
            Cell::text(image.full_name()),
            Cell::Labels(StatusLabels::dependency_health(
                image.analysis_complete,
                &image.counts(),
                NO_JAVA,
            )),
        ]
    }

    async fn fetch(&self, query: &ListQuery<()>) -> Result<Page<Image>> {
        self.api.images(&self.repository, query.page).await
    }

    fn details(&self, images: &[Image]) -> Vec<Section> {
        images
            .iter()
            .filter(|image| !image.dependencies.is_empty())
            .map(|image| {
                let mut dependencies: Vec<_> = image.dependencies.iter().collect();
                dependencies.sort_by(|a, b| a.gav.cmp(&b.gav));
                dependency_table(Some(&image.full_name()), &dependencies)
            })
            .collect()
    }
}

pub type ImageRepositoryList<A> = PagedList<ImageRepositorySource<A>>;
pub type ImageList<A> = PagedList<ImageSource<A>>;

pub fn image_repository_list<A: ImageApi>(api: A, per_page: u32) -> ImageRepositoryList<A> {
    PagedList::new(ImageRepositorySource::new(api), per_page)
}

pub fn image_list<A: ImageApi>(api: A, repository: &str, per_page: u32) -> ImageList<A> {
    PagedList::new(ImageSource::new(api, repository), per_page)
}

impl<A: ImageApi> ImageRepositorySource<A> {
    /// Submits an image reference, e.g. `quay.io/acme/app:1.0`, for analysis.
    pub async fn add_image(&self, image: &str) -> Result<()> {
        let image = image.trim();
        if image.is_empty() {
            return Err(ConsoleError::Validation {
                message: "an image reference is required".to_string(),
            }
            .into());
        }
        tracing::info!(image, "submitting image for analysis");
        self.api.add_image(image).await.inspect_err(|e| {
            tracing::error!(image, error = %e, "failed to add image");
        })
    }
}
