// src/content/mod.rs
//! Content aggregation: turning the board graph into page view-models.
//!
//! Every page follows the same round: resolve the page's list by keyword,
//! fetch its cards, then fan out per-card requests and assemble the result.
//! Profile pages bind cards by position through a [`ProfileSchema`]; the
//! gallery, commission and terms pages treat their cards as a plain set.

pub mod aggregator;
pub mod attachments;
mod error;
pub mod pricing;
pub mod resolver;
pub mod schema;
pub mod session;
mod state;

pub use aggregator::{ContentAggregator, PageContent};
pub use error::{Degradation, FetchStage, ItemFailure, PageError, SchemaError};
pub use resolver::resolve_list;
pub use schema::{DriftPolicy, FieldRole, FieldRule, ProfileSchema};
pub use session::{PageSession, Subscription};
pub use state::{PageData, PageState};

use crate::constants::{
    ABOUT_LIST_KEYWORD, COMMISSION_LIST_KEYWORD, GALLERY_LIST_KEYWORD, HOMEPAGE_LIST_KEYWORD,
    TERMS_LIST_KEYWORD,
};
use serde::Serialize;
use std::fmt;

/// The site pages backed by board content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    Gallery,
    Commissions,
    #[value(name = "terms")]
    #[serde(rename = "terms")]
    TermsOfService,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Gallery,
        Page::Commissions,
        Page::TermsOfService,
    ];

    /// Keyword that selects the page's list.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Home => HOMEPAGE_LIST_KEYWORD,
            Self::About => ABOUT_LIST_KEYWORD,
            Self::Gallery => GALLERY_LIST_KEYWORD,
            Self::Commissions => COMMISSION_LIST_KEYWORD,
            Self::TermsOfService => TERMS_LIST_KEYWORD,
        }
    }

    /// What the page shows, as phrased in its error message.
    pub fn subject(self) -> &'static str {
        match self {
            Self::Home | Self::About => "profile information",
            Self::Gallery => "gallery",
            Self::Commissions => "commission information",
            Self::TermsOfService => "term of service information",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::About => write!(f, "about"),
            Self::Gallery => write!(f, "gallery"),
            Self::Commissions => write!(f, "commissions"),
            Self::TermsOfService => write!(f, "terms"),
        }
    }
}
