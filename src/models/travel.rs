//! Travel entry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which collection a travel entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelKind {
    /// Places the user wants to visit.
    Next,
    /// Places the user has already been.
    Past,
}

impl TravelKind {
    pub const ALL: [TravelKind; 2] = [TravelKind::Next, TravelKind::Past];

    /// Short name used in URLs and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            TravelKind::Next => "next",
            TravelKind::Past => "past",
        }
    }

    /// Parse from a slug.
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "next" => Some(TravelKind::Next),
            "past" => Some(TravelKind::Past),
            _ => None,
        }
    }

    /// Page listing this collection's cards.
    pub fn page_path(&self) -> &'static str {
        match self {
            TravelKind::Next => "/NextTravelIdeas",
            TravelKind::Past => "/PastTravels",
        }
    }

    /// JSON endpoint returning this collection's entries.
    pub fn cards_path(&self) -> &'static str {
        match self {
            TravelKind::Next => "/TravelIdeasCards",
            TravelKind::Past => "/PastTravelsCards",
        }
    }

    /// Page with the add-entry form.
    pub fn form_path(&self) -> &'static str {
        match self {
            TravelKind::Next => "/NextTravelForm",
            TravelKind::Past => "/PastTravelForm",
        }
    }

    /// Form submission target.
    pub fn submit_path(&self) -> &'static str {
        match self {
            TravelKind::Next => "/SubmitNewTravelIdea",
            TravelKind::Past => "/SubmitPastTravel",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TravelKind::Next => "Next Travel Ideas",
            TravelKind::Past => "Past Travels",
        }
    }

    /// Label of the header button that links to the form.
    pub fn add_label(&self) -> &'static str {
        match self {
            TravelKind::Next => "Add New Travel Idea",
            TravelKind::Past => "Add Past Travel",
        }
    }

    /// Message shown when the collection has nothing to display.
    pub fn empty_message(&self) -> &'static str {
        match self {
            TravelKind::Next => {
                "Looks like you don't have any future travel plans. Let's start building your journal and plan a travel!"
            }
            TravelKind::Past => {
                "Looks like you don't have any past travels. Let's start building your journal by putting your past travels!"
            }
        }
    }

    /// Detail page for one entry.
    pub fn entry_path(&self, id: &Uuid) -> String {
        format!("/travels/{}/{}", self.slug(), id)
    }
}

impl std::fmt::Display for TravelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for TravelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| format!("unknown travel kind '{}' (expected next or past)", s))
    }
}

/// A single travel entry shown as a card.
///
/// Only `place` and `description` are required on the wire; a bare
/// `{"place": ..., "description": ...}` object deserializes with a fresh id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEntry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub place: String,
    pub description: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TravelEntry {
    pub fn new(place: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            place: place.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Build an entry from a validated form submission.
    pub fn from_new(new: NewTravel) -> Self {
        Self::new(new.place, new.description)
    }
}

/// Form payload for adding an entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTravel {
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub description: String,
}

impl NewTravel {
    /// Trim both fields and reject a blank place.
    pub fn validate(self) -> Result<Self, String> {
        let place = self.place.trim().to_string();
        if place.is_empty() {
            return Err("place must not be empty".to_string());
        }
        Ok(Self {
            place,
            description: self.description.trim().to_string(),
        })
    }
}
