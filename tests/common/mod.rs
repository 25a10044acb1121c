// tests/common/mod.rs
//! Shared fixtures: an in-memory board that implements `BoardRepository`.
#![allow(dead_code)]

use boardfolio::{
    AppError, Attachment, AttachmentId, BoardErrorCode, BoardId, BoardList, BoardRepository,
    Card, CardId, FetchStage, ListId,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub const BOARD: &str = "AbCd1234";

pub fn board_id() -> BoardId {
    BoardId::new(BOARD)
}

pub fn card(id: &str, name: &str, desc: &str) -> Card {
    Card {
        id: CardId::new(id),
        name: name.to_string(),
        desc: desc.to_string(),
    }
}

pub fn image(id: &str, url: &str) -> Attachment {
    attachment(id, url, Some("image/png"))
}

pub fn attachment(id: &str, url: &str, mime_type: Option<&str>) -> Attachment {
    Attachment {
        id: AttachmentId::new(id),
        url: url.to_string(),
        name: format!("{}.png", id),
        file_name: Some(format!("{}.png", id)),
        mime_type: mime_type.map(str::to_string),
        previews: Vec::new(),
    }
}

/// Sets a flag when the fetch holding it is dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// An in-memory board.
///
/// Lists keep insertion order. Card detail defaults to the card as listed
/// unless overridden with [`FakeBoard::detail`].
#[derive(Default)]
pub struct FakeBoard {
    lists: Vec<BoardList>,
    cards: HashMap<String, Vec<Card>>,
    details: HashMap<String, Card>,
    attachments: HashMap<String, Vec<Attachment>>,
    failures: HashSet<(String, &'static str)>,
    hanging: Option<String>,
    pub hang_started: Arc<Notify>,
    pub hang_dropped: Arc<AtomicBool>,
    pub requests: Mutex<Vec<String>>,
}

fn stage_key(stage: FetchStage) -> &'static str {
    match stage {
        FetchStage::Detail => "detail",
        FetchStage::Attachments => "attachments",
    }
}

impl FakeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a list with its cards, in board order.
    pub fn list(mut self, name: &str, cards: Vec<Card>) -> Self {
        let id = format!("list{}", self.lists.len());
        self.lists.push(BoardList {
            id: ListId::new(id.as_str()),
            name: name.to_string(),
            closed: false,
        });
        self.cards.insert(id, cards);
        self
    }

    /// Overrides the detail returned for a card.
    pub fn detail(mut self, card: Card) -> Self {
        self.details.insert(card.id.as_str().to_string(), card);
        self
    }

    pub fn attachments(mut self, card_id: &str, attachments: Vec<Attachment>) -> Self {
        self.attachments.insert(card_id.to_string(), attachments);
        self
    }

    /// Makes one per-card request fail with a service error.
    pub fn fail(mut self, card_id: &str, stage: FetchStage) -> Self {
        self.failures.insert((card_id.to_string(), stage_key(stage)));
        self
    }

    /// Makes the attachment request for `card_id` never complete.
    pub fn hang(mut self, card_id: &str) -> Self {
        self.hanging = Some(card_id.to_string());
        self
    }

    pub fn into_repo(self) -> Arc<FakeBoard> {
        Arc::new(self)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }

    fn check(&self, card: &CardId, stage: FetchStage) -> Result<(), AppError> {
        if self
            .failures
            .contains(&(card.as_str().to_string(), stage_key(stage)))
        {
            return Err(service_error(card));
        }
        Ok(())
    }
}

fn service_error(card: &CardId) -> AppError {
    AppError::BoardService {
        code: BoardErrorCode::ServiceUnavailable,
        message: format!("upstream failure for {}", card),
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn not_found(what: &str) -> AppError {
    AppError::BoardService {
        code: BoardErrorCode::NotFound,
        message: format!("{} not found", what),
        status: reqwest::StatusCode::NOT_FOUND,
    }
}

#[async_trait::async_trait]
impl BoardRepository for FakeBoard {
    async fn list_lists(&self, board: &BoardId) -> Result<Vec<BoardList>, AppError> {
        self.record(format!("boards/{}/lists", board));
        if board.as_str() != BOARD {
            return Err(not_found("board"));
        }
        Ok(self.lists.clone())
    }

    async fn list_cards(&self, list: &ListId) -> Result<Vec<Card>, AppError> {
        self.record(format!("lists/{}/cards", list));
        self.cards
            .get(list.as_str())
            .cloned()
            .ok_or_else(|| not_found("list"))
    }

    async fn get_card(&self, card: &CardId) -> Result<Card, AppError> {
        self.record(format!("cards/{}", card));
        self.check(card, FetchStage::Detail)?;
        if let Some(detail) = self.details.get(card.as_str()) {
            return Ok(detail.clone());
        }
        self.cards
            .values()
            .flatten()
            .find(|c| &c.id == card)
            .cloned()
            .ok_or_else(|| not_found("card"))
    }

    async fn list_attachments(&self, card: &CardId) -> Result<Vec<Attachment>, AppError> {
        self.record(format!("cards/{}/attachments", card));
        self.check(card, FetchStage::Attachments)?;
        if self.hanging.as_deref() == Some(card.as_str()) {
            let _guard = DropFlag(Arc::clone(&self.hang_dropped));
            self.hang_started.notify_one();
            std::future::pending::<()>().await;
        }
        Ok(self.attachments.get(card.as_str()).cloned().unwrap_or_default())
    }
}
