// src/content/schema.rs
//! Positional binding of profile cards to semantic roles.
//!
//! Profile-style lists carry no field names: by authoring convention card 0
//! holds the profile image and the following cards hold text fields in a
//! page-specific order. [`ProfileSchema`] makes that convention explicit and
//! checks it when the cards are fetched. A rule may carry a label the card
//! name is expected to contain; how a mismatch is treated depends on the
//! [`DriftPolicy`].

use super::{Degradation, PageError, SchemaError};
use crate::constants::{BIO_FALLBACK, DESCRIPTION_FALLBACK, NAME_FALLBACK};
use crate::model::Card;
use serde::Serialize;
use std::fmt;

/// Text roles a profile card can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Name,
    Description,
    Bio,
}

impl FieldRole {
    /// Text shown when the role has no card, or its card has no description.
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Name => NAME_FALLBACK,
            Self::Description => DESCRIPTION_FALLBACK,
            Self::Bio => BIO_FALLBACK,
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Description => write!(f, "description"),
            Self::Bio => write!(f, "bio"),
        }
    }
}

/// How label mismatches are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriftPolicy {
    /// Bind the card anyway and record a [`Degradation::FieldMismatch`].
    #[default]
    Lenient,
    /// Fail the page with [`SchemaError::LabelMismatch`].
    Strict,
}

/// Binds one text role to one card position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub role: FieldRole,
    pub position: usize,
    /// Case-insensitive substring the card name must contain, when set.
    pub label: Option<String>,
}

impl FieldRule {
    pub fn new(role: FieldRole, position: usize) -> Self {
        Self {
            role,
            position,
            label: None,
        }
    }

    fn accepts(&self, card: &Card) -> bool {
        self.label
            .as_ref()
            .map_or(true, |label| card.name.to_lowercase().contains(&label.to_lowercase()))
    }
}

/// The positional layout of a profile list.
///
/// The image holder is always card 0; text roles follow at their rule positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSchema {
    fields: Vec<FieldRule>,
}

impl ProfileSchema {
    /// Position of the card whose attachments supply the profile image.
    pub const IMAGE_POSITION: usize = 0;

    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self { fields }
    }

    /// About page: image, name, description, bio.
    pub fn about() -> Self {
        Self::new(vec![
            FieldRule::new(FieldRole::Name, 1),
            FieldRule::new(FieldRole::Description, 2),
            FieldRule::new(FieldRole::Bio, 3),
        ])
    }

    /// Home page: image, description. It has no name or bio card.
    pub fn home() -> Self {
        Self::new(vec![FieldRule::new(FieldRole::Description, 1)])
    }

    /// Requires the card bound to `role` to carry `label` in its name.
    pub fn with_label(mut self, role: FieldRole, label: impl Into<String>) -> Self {
        let label = label.into();
        for rule in self.fields.iter_mut().filter(|r| r.role == role) {
            rule.label = Some(label.clone());
        }
        self
    }

    pub fn has_role(&self, role: FieldRole) -> bool {
        self.fields.iter().any(|r| r.role == role)
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Binds `cards` (in list order) to this schema.
    ///
    /// An empty list is fatal. A missing text card falls back to the role's
    /// placeholder and is recorded as a degradation.
    pub fn bind<'a>(
        &self,
        list_name: &str,
        cards: &'a [Card],
        policy: DriftPolicy,
    ) -> Result<ProfileBinding<'a>, PageError> {
        let image_card = cards
            .get(Self::IMAGE_POSITION)
            .ok_or_else(|| PageError::EmptyList {
                list: list_name.to_string(),
            })?;

        let mut fields = Vec::with_capacity(self.fields.len());
        let mut degradations = Vec::new();

        for rule in &self.fields {
            let Some(card) = cards.get(rule.position) else {
                log::warn!(
                    "'{}' has no card at position {}; using fallback for {}",
                    list_name,
                    rule.position,
                    rule.role
                );
                degradations.push(Degradation::FieldMissing {
                    role: rule.role,
                    position: rule.position,
                });
                continue;
            };

            if !rule.accepts(card) {
                let expected = rule.label.clone().unwrap_or_default();
                match policy {
                    DriftPolicy::Strict => {
                        return Err(SchemaError::LabelMismatch {
                            list: list_name.to_string(),
                            role: rule.role,
                            position: rule.position,
                            expected,
                            found: card.name.clone(),
                        }
                        .into());
                    }
                    DriftPolicy::Lenient => {
                        log::warn!(
                            "'{}' card {} ('{}') does not look like the {}",
                            list_name,
                            rule.position,
                            card.name,
                            rule.role
                        );
                        degradations.push(Degradation::FieldMismatch {
                            role: rule.role,
                            position: rule.position,
                            expected,
                            found: card.name.clone(),
                        });
                    }
                }
            }

            fields.push(BoundField {
                role: rule.role,
                card,
            });
        }

        Ok(ProfileBinding {
            image_card,
            fields,
            degradations,
        })
    }
}

/// A text role together with the card it was bound to
#[derive(Debug, Clone, Copy)]
pub struct BoundField<'a> {
    pub role: FieldRole,
    pub card: &'a Card,
}

/// Cards of a profile list resolved to their roles
#[derive(Debug)]
pub struct ProfileBinding<'a> {
    pub image_card: &'a Card,
    pub fields: Vec<BoundField<'a>>,
    pub degradations: Vec<Degradation>,
}
