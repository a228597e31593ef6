//! Save and Load Workflow
//!
//! Validation and repository calls around the builder: saving in create or
//! edit mode and entering edit mode for a stored outfit.

use crate::builder::{BuilderState, OutfitMetadata};
use crate::error::{OutfitError, OutfitResult};
use crate::model::{Outfit, OutfitId, OutfitPatch, Season, UNTITLED_OUTFIT};
use crate::repository::OutfitRepository;
use crate::schedule::calendar_day;

/// Whether saving creates a new outfit or updates a stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderMode {
    #[default]
    Create,
    Edit(OutfitId),
}

impl BuilderMode {
    /// Mode for the `edit` query parameter of the builder page
    pub fn from_query(edit: Option<&str>) -> Self {
        edit.and_then(|raw| raw.trim().parse().ok())
            .map(|id| BuilderMode::Edit(OutfitId(id)))
            .unwrap_or_default()
    }

    pub fn outfit_id(&self) -> Option<OutfitId> {
        match self {
            BuilderMode::Create => None,
            BuilderMode::Edit(id) => Some(*id),
        }
    }
}

/// Contents of the save dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaveForm {
    pub name: String,
    /// Empty when no occasion was picked
    pub occasion: String,
    pub season: Option<Season>,
    /// `YYYY-MM-DD`, or empty
    pub scheduled_date: String,
}

impl SaveForm {
    /// Form seeded from the outfit being edited
    pub fn prefilled(outfit: &Outfit) -> Self {
        let name = if outfit.name == UNTITLED_OUTFIT {
            String::new()
        } else {
            outfit.name.clone()
        };
        Self {
            name,
            occasion: outfit.occasion.clone().unwrap_or_default(),
            season: outfit.season,
            scheduled_date: outfit
                .scheduled_date
                .as_deref()
                .and_then(calendar_day)
                .map(|day| day.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    fn metadata(&self) -> OutfitMetadata {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        OutfitMetadata {
            name: Some(self.name.trim().to_string()),
            occasion: optional(&self.occasion),
            season: self.season,
            scheduled_date: optional(&self.scheduled_date),
        }
    }
}

/// Builder snapshot and mode to show after a workflow step
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    pub state: BuilderState,
    pub mode: BuilderMode,
}

impl SessionUpdate {
    /// Empty create state, the fallback whenever loading fails
    pub fn fresh(state: &BuilderState) -> Self {
        Self {
            state: state.clear(),
            mode: BuilderMode::Create,
        }
    }
}

/// Validate the form against the outfit and return the outfit to persist.
///
/// The name is checked first, then that at least one item is placed.
pub fn prepare_save(state: &BuilderState, form: &SaveForm) -> OutfitResult<BuilderState> {
    if form.name.trim().is_empty() {
        return Err(OutfitError::MissingName);
    }
    if state.outfit.items.is_empty() {
        return Err(OutfitError::EmptyOutfit);
    }
    Ok(state.set_metadata(form.metadata()))
}

/// Persist the builder's outfit, creating or updating per `mode`.
///
/// Nothing is sent when validation fails. On success the builder keeps its
/// placement, adopts the stored identity, and switches to edit mode.
pub async fn save_outfit<R: OutfitRepository + ?Sized>(
    repo: &R,
    mode: BuilderMode,
    state: &BuilderState,
    form: &SaveForm,
) -> OutfitResult<SessionUpdate> {
    let ready = prepare_save(state, form)?;
    let saved = match mode {
        BuilderMode::Create => repo.create(&ready.outfit).await?,
        BuilderMode::Edit(id) => {
            repo.update(id, &OutfitPatch::from_outfit(&ready.outfit))
                .await?
        }
    };
    let mode = saved.id.map(BuilderMode::Edit).unwrap_or(mode);
    log::info!("Saved outfit \"{}\" ({mode:?})", saved.name);
    Ok(SessionUpdate {
        state: ready.mark_saved(&saved),
        mode,
    })
}

/// Replace the builder's outfit with stored outfit `id`
pub async fn load_for_edit<R: OutfitRepository + ?Sized>(
    repo: &R,
    state: &BuilderState,
    id: OutfitId,
) -> OutfitResult<SessionUpdate> {
    let outfit = repo.read(id).await?;
    log::info!("Loaded outfit {id} with {} items", outfit.items.len());
    Ok(SessionUpdate {
        state: state.load_outfit(outfit),
        mode: BuilderMode::Edit(id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_query() {
        assert_eq!(BuilderMode::from_query(Some("42")), BuilderMode::Edit(OutfitId(42)));
        assert_eq!(BuilderMode::from_query(Some("abc")), BuilderMode::Create);
        assert_eq!(BuilderMode::from_query(None), BuilderMode::Create);
    }

    #[test]
    fn test_prefilled_form() {
        let mut outfit = Outfit::untitled();
        assert_eq!(SaveForm::prefilled(&outfit).name, "");

        outfit.name = "Gala".to_string();
        outfit.scheduled_date = Some("2025-12-25T00:00:00Z".to_string());
        outfit.season = Some(Season::Winter);
        let form = SaveForm::prefilled(&outfit);
        assert_eq!(form.name, "Gala");
        assert_eq!(form.scheduled_date, "2025-12-25");
        assert_eq!(form.season, Some(Season::Winter));
        assert_eq!(form.occasion, "");
    }

    #[test]
    fn test_name_checked_before_items() {
        let state = BuilderState::new();
        let blank = SaveForm {
            name: "   ".to_string(),
            ..SaveForm::default()
        };
        assert_eq!(prepare_save(&state, &blank), Err(OutfitError::MissingName));

        let named = SaveForm {
            name: "Weekend".to_string(),
            ..SaveForm::default()
        };
        assert_eq!(prepare_save(&state, &named), Err(OutfitError::EmptyOutfit));
    }
}
