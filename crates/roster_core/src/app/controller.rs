//! Two-screen view controller.
//!
//! # Responsibility
//! - Run the Form/List state machine and the edit lifecycle.
//! - Convert validator and store outcomes into screen state and notices.
//!
//! # Invariants
//! - Submission never reaches the store while the form has violations.
//! - A failed refresh keeps the previously loaded rows on screen.
//! - Search changes always reset to page 1.

use crate::app::notify::{Notice, NoticeKind, NoticeSlot};
use crate::config::AppConfig;
use crate::form::state::{Field, FormState};
use crate::form::validate::validate;
use crate::model::person::{Person, PersonId};
use crate::store::{PageQuery, PersonStore, StoreResult};
use log::warn;
use std::time::{Duration, Instant};

/// Top-level UI screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    List,
}

/// What a form submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(PersonId),
    Updated(PersonId),
    /// Validation failed; field errors are set and the store was not touched.
    Invalid,
    /// The store rejected the operation; surfaced as an error notice.
    Failed,
}

/// UI state machine over a `PersonStore`.
pub struct ViewController {
    store: Box<dyn PersonStore>,
    page_size: u32,
    screen: Screen,
    form: FormState,
    edit_target: Option<PersonId>,
    search: String,
    page: u32,
    page_count: u32,
    total_count: u64,
    rows: Vec<Person>,
    notices: NoticeSlot,
}

impl ViewController {
    pub fn new(store: Box<dyn PersonStore>, page_size: u32, notice_ttl: Duration) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
            screen: Screen::Form,
            form: FormState::default(),
            edit_target: None,
            search: String::new(),
            page: 1,
            page_count: 1,
            total_count: 0,
            rows: Vec::new(),
            notices: NoticeSlot::new(notice_ttl),
        }
    }

    /// Builds the controller and its backing store from configuration.
    pub fn from_config(config: &AppConfig) -> StoreResult<Self> {
        Ok(Self::new(
            config.open_store()?,
            config.page_size,
            config.notification_ttl,
        ))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn edit_target(&self) -> Option<PersonId> {
        self.edit_target
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Rows of the currently loaded page.
    pub fn rows(&self) -> &[Person] {
        &self.rows
    }

    /// Active notice, if its window has not elapsed.
    pub fn notice(&mut self, now: Instant) -> Option<&Notice> {
        self.notices.current(now)
    }

    /// Switches the active tab; entering the list refreshes it.
    pub fn select_screen(&mut self, screen: Screen, now: Instant) {
        self.screen = screen;
        if screen == Screen::List {
            self.refresh(now);
        }
    }

    /// Updates one form field as the user types.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validates and saves the form, creating or updating per edit target.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let draft = match validate(&self.form.fields) {
            Ok(draft) => draft,
            Err(errors) => {
                self.form.errors = errors;
                self.notices.raise(
                    NoticeKind::Error,
                    "please fix the highlighted fields",
                    now,
                );
                return SubmitOutcome::Invalid;
            }
        };

        let result = match self.edit_target {
            Some(id) => self
                .store
                .update(id, &draft.into_patch())
                .map(|person| SubmitOutcome::Updated(person.id)),
            None => self
                .store
                .create(&draft)
                .map(|person| SubmitOutcome::Created(person.id)),
        };

        match result {
            Ok(outcome) => {
                let text = match outcome {
                    SubmitOutcome::Updated(_) => "person updated",
                    _ => "new person registered",
                };
                self.notices.raise(NoticeKind::Success, text, now);
                self.form.clear();
                self.edit_target = None;
                if self.screen == Screen::List {
                    self.refresh(now);
                }
                outcome
            }
            Err(err) => {
                warn!("event=submit module=app status=error error={err}");
                self.notices.raise(
                    NoticeKind::Error,
                    "could not save the record, please try again",
                    now,
                );
                SubmitOutcome::Failed
            }
        }
    }

    /// Starts editing a row from the current page.
    ///
    /// Returns `false` when `id` is not on the loaded page; state is left
    /// unchanged in that case.
    pub fn begin_edit(&mut self, id: PersonId) -> bool {
        let Some(person) = self.rows.iter().find(|person| person.id == id) else {
            return false;
        };

        self.edit_target = Some(person.id);
        let person = person.clone();
        self.form.errors.clear();
        self.form.fields.fill_from(&person);
        self.screen = Screen::Form;
        true
    }

    /// Abandons the edit without touching the store.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.form.clear();
    }

    /// Applies a new search filter and jumps back to the first page.
    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search = text.into();
        self.page = 1;
        self.refresh(now);
    }

    /// Jumps to a page, clamped to `[1, page_count]`.
    pub fn set_page(&mut self, page: u32, now: Instant) {
        self.page = page.clamp(1, self.page_count);
        self.refresh(now);
    }

    pub fn next_page(&mut self, now: Instant) {
        self.set_page(self.page.saturating_add(1), now);
    }

    pub fn prev_page(&mut self, now: Instant) {
        self.set_page(self.page.saturating_sub(1), now);
    }

    /// Reloads the current page from the store.
    pub fn refresh(&mut self, now: Instant) {
        let query = PageQuery::new(self.page, self.page_size, self.search.clone());
        match self.store.list(&query) {
            Ok(result) => {
                self.page_count = result.page_count();
                self.total_count = result.total_count;
                self.rows = result.data;
            }
            Err(err) => {
                warn!("event=list_refresh module=app status=error error={err}");
                self.notices
                    .raise(NoticeKind::Error, "could not load the person list", now);
            }
        }
    }
}
