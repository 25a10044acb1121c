// src/content/resolver.rs
//! Picks the list that feeds a page.

use super::PageError;
use crate::model::BoardList;

/// Returns the first list, in board order, whose lower-cased name contains `keyword`.
///
/// Board order is authoritative: when several lists match, the earliest one
/// wins and no secondary ordering is applied.
pub fn resolve_list<'a>(lists: &'a [BoardList], keyword: &str) -> Result<&'a BoardList, PageError> {
    let needle = keyword.to_lowercase();
    lists
        .iter()
        .find(|list| list.name.to_lowercase().contains(&needle))
        .ok_or_else(|| PageError::ListNotFound {
            keyword: keyword.to_string(),
        })
}
