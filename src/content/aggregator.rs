// src/content/aggregator.rs
//! Per-page orchestration over a [`BoardRepository`].
//!
//! Each page performs one sequential round (lists, then the resolved list's
//! cards) followed by a concurrent fan-out of per-card requests. The fan-out
//! is unbounded and joined on the calling task, so dropping the page's
//! future drops every outstanding request with it.
//!
//! Profile pages are all-or-nothing past the list round. Set-mode pages
//! (gallery, commissions, terms) exclude a card whose requests fail and
//! record it as a [`Degradation::ItemFailed`] instead.

use super::attachments::{collect_images, primary_image};
use super::session::PageSession;
use super::{
    resolve_list, Degradation, DriftPolicy, FetchStage, FieldRole, ItemFailure, Page, PageData,
    PageError, ProfileSchema,
};
use crate::api::BoardRepository;
use crate::constants::SECTION_FALLBACK;
use crate::model::{
    BoardList, Card, CommissionEntry, GalleryItem, Pricing, ProfileViewModel, TosSection,
};
use crate::types::BoardId;
use futures::future::{join, join_all};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;

/// The view-model of any page, for callers that pick the page at runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageContent {
    Profile(ProfileViewModel),
    Gallery(Vec<GalleryItem>),
    Commissions(Vec<CommissionEntry>),
    TermsOfService(Vec<TosSection>),
}

/// Builds page view-models from one board.
#[derive(Clone)]
pub struct ContentAggregator {
    repo: Arc<dyn BoardRepository>,
    board: BoardId,
    policy: DriftPolicy,
    home_schema: ProfileSchema,
    about_schema: ProfileSchema,
}

impl ContentAggregator {
    pub fn new(repo: Arc<dyn BoardRepository>, board: BoardId) -> Self {
        Self {
            repo,
            board,
            policy: DriftPolicy::default(),
            home_schema: ProfileSchema::home(),
            about_schema: ProfileSchema::about(),
        }
    }

    pub fn with_policy(mut self, policy: DriftPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_home_schema(mut self, schema: ProfileSchema) -> Self {
        self.home_schema = schema;
        self
    }

    pub fn with_about_schema(mut self, schema: ProfileSchema) -> Self {
        self.about_schema = schema;
        self
    }

    pub fn board(&self) -> &BoardId {
        &self.board
    }

    /// Loads any page as a [`PageContent`].
    pub async fn load(&self, page: Page) -> Result<PageData<PageContent>, PageError> {
        Ok(match page {
            Page::Home => self.home().await?.map(PageContent::Profile),
            Page::About => self.about().await?.map(PageContent::Profile),
            Page::Gallery => self.gallery().await?.map(PageContent::Gallery),
            Page::Commissions => self.commissions().await?.map(PageContent::Commissions),
            Page::TermsOfService => self.terms_of_service().await?.map(PageContent::TermsOfService),
        })
    }

    /// Opens a session that loads `page` in the background.
    pub fn open(&self, page: Page) -> PageSession<PageContent> {
        let aggregator = self.clone();
        PageSession::open(page, async move { aggregator.load(page).await })
    }

    pub async fn home(&self) -> Result<PageData<ProfileViewModel>, PageError> {
        self.profile(Page::Home, &self.home_schema).await
    }

    pub async fn about(&self) -> Result<PageData<ProfileViewModel>, PageError> {
        self.profile(Page::About, &self.about_schema).await
    }

    /// One gallery item per image; cards without images contribute nothing.
    pub async fn gallery(&self) -> Result<PageData<Vec<GalleryItem>>, PageError> {
        let (_, cards) = self.resolve_cards(Page::Gallery).await?;

        let (per_card, degradations) = fan_out(&cards, |card| async move {
            let attachments = self
                .repo
                .list_attachments(&card.id)
                .await
                .map_err(|e| ItemFailure::new(card, FetchStage::Attachments, &e))?;

            let items: Vec<GalleryItem> = collect_images(&attachments)
                .into_iter()
                .map(|image| GalleryItem::new(card, image))
                .collect();
            Ok::<_, ItemFailure>((!items.is_empty()).then_some(items))
        })
        .await;

        let items: Vec<GalleryItem> = per_card.into_iter().flatten().collect();
        log::info!("Gallery: {} image(s) from {} card(s)", items.len(), cards.len());
        Ok(PageData::new(items, degradations))
    }

    /// One entry per commission card that carries at least one image.
    pub async fn commissions(&self) -> Result<PageData<Vec<CommissionEntry>>, PageError> {
        let (_, cards) = self.resolve_cards(Page::Commissions).await?;

        let (entries, degradations) = fan_out(&cards, |card| async move {
            let detail = self
                .repo
                .get_card(&card.id)
                .await
                .map_err(|e| ItemFailure::new(card, FetchStage::Detail, &e))?;
            let attachments = self
                .repo
                .list_attachments(&card.id)
                .await
                .map_err(|e| ItemFailure::new(card, FetchStage::Attachments, &e))?;

            let images = collect_images(&attachments);
            if images.is_empty() {
                log::debug!("Commission card '{}' has no images; skipped", card.name);
                return Ok(None);
            }

            Ok::<_, ItemFailure>(Some(CommissionEntry {
                id: card.id.clone(),
                name: card.name.clone(),
                pricing: Pricing::parse(&detail.desc),
                description: detail.desc,
                images,
            }))
        })
        .await;

        log::info!("Commissions: {} of {} card(s) listed", entries.len(), cards.len());
        Ok(PageData::new(entries, degradations))
    }

    /// One section per card, named and described from the card detail.
    ///
    /// Unlike the gallery and commission pages, an empty terms list is an error.
    pub async fn terms_of_service(&self) -> Result<PageData<Vec<TosSection>>, PageError> {
        let (list, cards) = self.resolve_cards(Page::TermsOfService).await?;
        if cards.is_empty() {
            return Err(PageError::EmptyList { list: list.name });
        }

        let (sections, degradations) = fan_out(&cards, |card| async move {
            let detail = self
                .repo
                .get_card(&card.id)
                .await
                .map_err(|e| ItemFailure::new(card, FetchStage::Detail, &e))?;

            let description = detail
                .description()
                .unwrap_or(SECTION_FALLBACK)
                .to_string();
            Ok::<_, ItemFailure>(Some(TosSection {
                id: detail.id,
                name: detail.name,
                description,
            }))
        })
        .await;

        Ok(PageData::new(sections, degradations))
    }

    async fn profile(
        &self,
        page: Page,
        schema: &ProfileSchema,
    ) -> Result<PageData<ProfileViewModel>, PageError> {
        let (list, cards) = self.resolve_cards(page).await?;
        let binding = schema.bind(&list.name, &cards, self.policy)?;

        let details = join_all(binding.fields.iter().map(|field| async move {
            let detail = self.repo.get_card(&field.card.id).await?;
            Ok::<_, PageError>((field.role, detail))
        }));
        let (attachments, details) =
            join(self.repo.list_attachments(&binding.image_card.id), details).await;

        let attachments = attachments?;
        let mut name = None;
        let mut description = None;
        let mut bio = None;
        for detail in details {
            let (role, card) = detail?;
            let text = card.description().map(str::to_string);
            match role {
                FieldRole::Name => name = text,
                FieldRole::Description => description = text,
                FieldRole::Bio => bio = text,
            }
        }

        let view = ProfileViewModel {
            name: name.unwrap_or_else(|| FieldRole::Name.fallback().to_string()),
            description: description
                .unwrap_or_else(|| FieldRole::Description.fallback().to_string()),
            bio: schema
                .has_role(FieldRole::Bio)
                .then(|| bio.unwrap_or_else(|| FieldRole::Bio.fallback().to_string())),
            image_url: primary_image(&attachments).map(|image| image.url.clone()),
        };

        if view.image_url.is_none() {
            log::warn!("'{}' image card has no image attachment", list.name);
        }
        Ok(PageData::new(view, binding.degradations))
    }

    /// The sequential round: board lists, the page's list, its cards.
    async fn resolve_cards(&self, page: Page) -> Result<(BoardList, Vec<Card>), PageError> {
        let lists = self.repo.list_lists(&self.board).await?;
        let list = resolve_list(&lists, page.keyword())?.clone();
        let cards = self.repo.list_cards(&list.id).await?;

        log::info!(
            "Resolved {} page to list '{}' ({} cards)",
            page,
            list.name,
            cards.len()
        );
        Ok((list, cards))
    }
}

/// Runs `fetch` for every card concurrently and joins the results in card order.
///
/// `Ok(None)` drops a card silently (it had nothing to show); `Err` drops it
/// and records the failure.
async fn fan_out<'a, T, F, Fut>(cards: &'a [Card], fetch: F) -> (Vec<T>, Vec<Degradation>)
where
    F: Fn(&'a Card) -> Fut,
    Fut: Future<Output = Result<Option<T>, ItemFailure>>,
{
    let results = join_all(cards.iter().map(fetch)).await;

    let mut items = Vec::with_capacity(results.len());
    let mut degradations = Vec::new();
    for result in results {
        match result {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(failure) => {
                log::warn!("Excluding {}", failure);
                degradations.push(Degradation::ItemFailed(failure));
            }
        }
    }
    (items, degradations)
}
