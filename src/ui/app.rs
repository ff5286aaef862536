use crate::api::CatFact;
use crate::form::prepare_fact;
use crate::store::{AddFactOutcome, FactStore, RandomFactOutcome, SUBMIT_FAILED};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::random::{RandomFactIntent, RandomFactReducer, RandomFactState};
use tokio::sync::mpsc;

/// Work the UI hands to the async worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    AddFact { text: String },
    FetchRandom,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Initial fetch progress, shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root of the UI: the form and the list, wired to one [`FactStore`].
pub struct App {
    should_quit: bool,
    store: FactStore,
    base_url: String,
    commands: UiCommandSender,
    /// Form state (MVI pattern).
    form: FormState,
    /// Random fact banner (MVI pattern).
    random: RandomFactState,
    load_status: LoadStatus,
    list_scroll: u16,
    /// Scroll limit measured by the last draw, in wrapped rows.
    list_max_scroll: u16,
}

impl App {
    pub fn new(store: FactStore, base_url: impl Into<String>, commands: UiCommandSender) -> Self {
        Self {
            should_quit: false,
            store,
            base_url: base_url.into(),
            commands,
            form: FormState::default(),
            random: RandomFactState::default(),
            load_status: LoadStatus::Loading,
            list_scroll: 0,
            list_max_scroll: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn facts(&self) -> Vec<CatFact> {
        self.store.facts()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn random_fact(&self) -> &RandomFactState {
        &self.random
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn list_scroll(&self) -> u16 {
        self.list_scroll
    }

    pub fn type_char(&mut self, ch: char) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Insert(ch));
    }

    pub fn backspace(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Backspace);
    }

    pub fn clear_input(&mut self) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Clear);
    }

    /// Submit the current input.
    ///
    /// Returns `true` if an `AddFact` command was sent. Nothing is sent while
    /// a submission is pending or when validation fails.
    pub fn submit(&mut self) -> bool {
        if self.form.is_pending() {
            return false;
        }

        let text = match prepare_fact(Some(self.form.input.as_str())) {
            Ok(text) => text,
            Err(rejected) => {
                let errors = rejected.errors().to_vec();
                dispatch_mvi!(self, form, FormReducer, FormIntent::Invalid { errors });
                return false;
            }
        };

        match self.commands.try_send(UiCommand::AddFact { text: text.clone() }) {
            Ok(()) => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::Submitted);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to queue fact submission");
                let outcome = AddFactOutcome::Rejected {
                    errors: vec![SUBMIT_FAILED.to_string()],
                    entered: text,
                };
                dispatch_mvi!(self, form, FormReducer, FormIntent::Finished(outcome));
                false
            }
        }
    }

    /// Ask the worker for a random fact. Ignored while one is being fetched.
    pub fn request_random_fact(&mut self) -> bool {
        if self.random.is_loading() {
            return false;
        }
        match self.commands.try_send(UiCommand::FetchRandom) {
            Ok(()) => {
                dispatch_mvi!(self, random, RandomFactReducer, RandomFactIntent::Requested);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to queue random fact request");
                false
            }
        }
    }

    pub fn dismiss_random_fact(&mut self) {
        dispatch_mvi!(self, random, RandomFactReducer, RandomFactIntent::Dismiss);
    }

    pub fn on_facts_loaded(&mut self, result: Result<usize, String>) {
        self.load_status = match result {
            Ok(_) => LoadStatus::Loaded,
            Err(message) => LoadStatus::Failed(message),
        };
    }

    pub fn on_submit_finished(&mut self, outcome: AddFactOutcome) {
        dispatch_mvi!(self, form, FormReducer, FormIntent::Finished(outcome));
    }

    pub fn on_random_finished(&mut self, outcome: RandomFactOutcome) {
        dispatch_mvi!(self, random, RandomFactReducer, RandomFactIntent::Finished(outcome));
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.list_scroll = self.list_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.list_scroll = self
            .list_scroll
            .saturating_add(lines)
            .min(self.list_max_scroll);
    }

    /// Record how far the list can scroll at the current terminal size.
    pub fn set_list_max_scroll(&mut self, max: u16) {
        self.list_max_scroll = max;
        self.list_scroll = self.list_scroll.min(max);
    }
}
