//! Session state container.
//!
//! [`CurriculumStore`] owns the current template, the student's progress and
//! the list of locally authored template versions. It is constructed
//! explicitly by the composition root and passed to consumers; it is not a
//! global. All mutation goes through its operations, which replace state
//! wholesale and bump a revision counter so observers can cheaply detect
//! change — callers must never mutate returned snapshots in place.

use crate::core::catalog::TemplateCatalog;
use crate::core::eligibility::{self, AvailableCourse, GroupProgress};
use crate::core::models::{Category, Course, CurriculumTemplate, PassedCourse, UserProgress};
use crate::core::session::SessionState;
use logger::{debug, warn};
use std::collections::HashMap;

/// Holds the current template, user progress and custom template list
#[derive(Debug, Default)]
pub struct CurriculumStore {
    template: Option<CurriculumTemplate>,
    user_progress: UserProgress,
    custom_templates: Vec<CurriculumTemplate>,
    is_loading: bool,
    revision: u64,
}

impl CurriculumStore {
    /// Create an empty store: no template, empty progress, no custom templates
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a store from persisted session state.
    ///
    /// The current template is not part of the durable state; call
    /// [`load_template`](Self::load_template) with the progress record's
    /// template id to restore it.
    #[must_use]
    pub fn from_session(state: SessionState) -> Self {
        Self {
            template: None,
            user_progress: state.user_progress,
            custom_templates: state.custom_templates,
            is_loading: false,
            revision: 0,
        }
    }

    /// Extract the durable slice of the store's state for persistence
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        SessionState {
            user_progress: self.user_progress.clone(),
            custom_templates: self.custom_templates.clone(),
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// The currently loaded template, if any
    #[must_use]
    pub const fn template(&self) -> Option<&CurriculumTemplate> {
        self.template.as_ref()
    }

    /// The student's progress record
    #[must_use]
    pub const fn user_progress(&self) -> &UserProgress {
        &self.user_progress
    }

    /// Locally authored template versions, oldest first
    #[must_use]
    pub fn custom_templates(&self) -> &[CurriculumTemplate] {
        &self.custom_templates
    }

    /// Whether a template load is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Monotonic counter incremented on every mutation
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn adopt(&mut self, template: CurriculumTemplate) {
        self.user_progress.template_id = template.id.clone();
        self.template = Some(template);
    }

    /// Load a template by id: the custom list first, then the catalog.
    ///
    /// Adopting a template updates `user_progress.template_id` but never
    /// touches the passed-course list. A failed catalog fetch is logged and
    /// leaves all state unchanged; callers detect the failure through the
    /// return value or a still-absent template.
    pub fn load_template(&mut self, template_id: &str, catalog: &dyn TemplateCatalog) -> bool {
        self.is_loading = true;
        self.bump();

        let custom = self
            .custom_templates
            .iter()
            .find(|t| t.id == template_id)
            .cloned();

        let loaded = if let Some(template) = custom {
            debug!("Loaded custom template '{template_id}'");
            self.adopt(template);
            true
        } else {
            match catalog.fetch(template_id) {
                Ok(template) => {
                    debug!("Loaded catalog template '{template_id}'");
                    self.adopt(template);
                    true
                }
                Err(e) => {
                    warn!("Failed to load template '{template_id}': {e}");
                    false
                }
            }
        };

        self.is_loading = false;
        self.bump();
        loaded
    }

    /// Adopt a template directly, pointing the progress record at it
    pub fn set_template(&mut self, template: CurriculumTemplate) {
        self.adopt(template);
        self.bump();
    }

    /// Toggle a course's passed state.
    ///
    /// Removes the course when present, appends `{course_id, term}` when not;
    /// calling twice restores the original state. The id is accepted as
    /// given — unknown ids are tolerated and simply never join against the
    /// template.
    pub fn toggle_course(&mut self, course_id: &str, term: u32) {
        let existing = self
            .user_progress
            .passed_courses
            .iter()
            .position(|p| p.course_id == course_id);

        match existing {
            Some(index) => {
                self.user_progress.passed_courses.remove(index);
            }
            None => {
                self.user_progress
                    .passed_courses
                    .push(PassedCourse::new(course_id.to_string(), term));
            }
        }
        self.bump();
    }

    /// Save an edited template as the next version of its lineage.
    ///
    /// Computes `base.v{N+1}` from the stored custom versions, appends the
    /// new entry (existing entries are never mutated) and switches the
    /// current template and progress pointer to it. Course-uniqueness
    /// validation is the caller's responsibility and must happen before this
    /// operation.
    ///
    /// # Returns
    /// The id assigned to the saved version.
    pub fn save_template_version(&mut self, mut edited: CurriculumTemplate) -> String {
        let existing_ids: Vec<&str> = self
            .custom_templates
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let new_id = edited.next_version_id(&existing_ids);

        edited.id = new_id.clone();
        self.custom_templates.push(edited.clone());
        self.adopt(edited);
        self.bump();
        new_id
    }

    /// Upsert a template into the custom list by id and adopt it as current
    pub fn import_template(&mut self, template: CurriculumTemplate) {
        match self
            .custom_templates
            .iter_mut()
            .find(|t| t.id == template.id)
        {
            Some(existing) => *existing = template.clone(),
            None => self.custom_templates.push(template.clone()),
        }
        self.adopt(template);
        self.bump();
    }

    /// Remove a custom template by id.
    ///
    /// The current template pointer is left alone even when it referenced the
    /// deleted id; dangling references are tolerated throughout.
    ///
    /// # Returns
    /// `true` if an entry was removed.
    pub fn delete_custom_template(&mut self, template_id: &str) -> bool {
        let before = self.custom_templates.len();
        self.custom_templates.retain(|t| t.id != template_id);
        let removed = self.custom_templates.len() != before;
        if removed {
            self.bump();
        }
        removed
    }

    /// Replace the progress record wholesale.
    ///
    /// For validated imports only; the import boundary must already have
    /// checked that the record targets the current template.
    pub fn replace_progress(&mut self, progress: UserProgress) {
        self.user_progress = progress;
        self.bump();
    }

    /// Clear all passed courses, keeping the template reference
    pub fn reset_progress(&mut self) {
        self.user_progress.reset();
        self.bump();
    }

    // --- Derived views (computed by the eligibility engine) ---

    /// Unit progress for a group of the current template; zeros when no
    /// template is loaded or the group is unknown
    #[must_use]
    pub fn group_progress(&self, group_id: &str) -> GroupProgress {
        self.template.as_ref().map_or_else(GroupProgress::default, |t| {
            eligibility::group_progress(t, &self.user_progress, group_id)
        })
    }

    /// Total units passed against the current template
    #[must_use]
    pub fn total_units_completed(&self) -> u32 {
        self.template.as_ref().map_or(0, |t| {
            let courses: Vec<Course> = t.all_courses().cloned().collect();
            eligibility::units_completed(&courses, &self.user_progress.passed_courses)
        })
    }

    /// Courses of the current template that can be taken right now
    #[must_use]
    pub fn fully_available(&self) -> Vec<Course> {
        self.template.as_ref().map_or_else(Vec::new, |t| {
            let courses: Vec<Course> = t.all_courses().cloned().collect();
            eligibility::fully_available_courses(&courses, &self.user_progress.passed_courses)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// All courses of the current template annotated with availability
    #[must_use]
    pub fn available(&self) -> Vec<AvailableCourse> {
        self.template.as_ref().map_or_else(Vec::new, |t| {
            let courses: Vec<Course> = t.all_courses().cloned().collect();
            eligibility::available_courses(&courses, &self.user_progress.passed_courses)
        })
    }

    /// Passed units per category for the current template
    #[must_use]
    pub fn units_by_category(&self) -> HashMap<Category, u32> {
        self.template.as_ref().map_or_else(HashMap::new, |t| {
            let courses: Vec<Course> = t.all_courses().cloned().collect();
            eligibility::units_by_category(&courses, &self.user_progress.passed_courses)
        })
    }
}
