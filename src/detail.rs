use crate::error::{CatalogError, FetchError};
use crate::model::{Recipe, RecipeId};
use crate::navigation::{browse_by_category, NavigationTarget};
use crate::repository::RecipeRepository;
use crate::views::{FETCH_ERROR, RECIPE_NOT_FOUND};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Progress and outcome of a single recipe lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(Recipe),
    NotFound,
    Failed(FetchError),
}

impl DetailState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetailState::Loading)
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            DetailState::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }

    /// Message to show instead of the recipe, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DetailState::NotFound => Some(RECIPE_NOT_FOUND),
            DetailState::Failed(_) => Some(FETCH_ERROR),
            _ => None,
        }
    }
}

/// Category of the loaded recipe, if one is loaded
pub fn category_of(state: &DetailState) -> Option<&str> {
    state.recipe().map(|r| r.category.as_str())
}

/// Resolves recipe ids into [`DetailState`]s.
///
/// Every call to [`resolve`](Self::resolve) takes a new ticket and resets the
/// state to `Loading`. A response is only applied while its ticket is still
/// the latest one, so a slow answer to an older request never overwrites the
/// outcome of a newer one. Views follow the state with
/// [`subscribe`](Self::subscribe) or poll it with [`state`](Self::state).
pub struct RecipeDetailResolver {
    repository: RecipeRepository,
    state: watch::Sender<DetailState>,
    latest: AtomicU64,
}

impl RecipeDetailResolver {
    pub fn new(repository: RecipeRepository) -> Self {
        let (state, _) = watch::channel(DetailState::Loading);
        Self {
            repository,
            state,
            latest: AtomicU64::new(0),
        }
    }

    /// Look up `id` and return the resulting state.
    ///
    /// If a newer request started while this one was in flight, the returned
    /// value is whatever that newer request has produced so far.
    pub async fn resolve(&self, id: RecipeId) -> DetailState {
        let ticket = self.begin(id);

        let outcome = match self.repository.get_by_id(id).await {
            Ok(recipe) => DetailState::Loaded(recipe),
            Err(CatalogError::NotFound(_)) => DetailState::NotFound,
            Err(CatalogError::FetchError(e)) => DetailState::Failed(e),
            Err(e) => DetailState::Failed(FetchError::Transport(e.to_string())),
        };

        self.settle(ticket, id, outcome);
        self.state()
    }

    /// Current state
    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    /// Category of the currently loaded recipe
    pub fn category(&self) -> Option<String> {
        category_of(&self.state.borrow()).map(str::to_string)
    }

    /// "Browse by category" destination for the currently loaded recipe
    pub fn browse_category(&self) -> Option<NavigationTarget> {
        category_of(&self.state.borrow()).map(browse_by_category)
    }

    fn begin(&self, id: RecipeId) -> u64 {
        let mut ticket = 0;
        self.state.send_modify(|state| {
            ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = DetailState::Loading;
        });
        debug!("Request #{} for recipe {} started", ticket, id);
        ticket
    }

    fn settle(&self, ticket: u64, id: RecipeId, outcome: DetailState) -> bool {
        let applied = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *state = outcome;
            true
        });

        if applied {
            match &*self.state.borrow() {
                DetailState::Failed(e) => warn!("Recipe {} could not be fetched: {}", id, e),
                state => info!("Recipe {} resolved: {:?}", id, Outcome(state)),
            }
        } else {
            debug!(
                "Discarding stale response #{} for recipe {}; a newer request is current",
                ticket, id
            );
        }
        applied
    }
}

/// Short log form of a state
struct Outcome<'a>(&'a DetailState);

impl std::fmt::Debug for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            DetailState::Loading => f.write_str("loading"),
            DetailState::Loaded(recipe) => write!(f, "loaded '{}'", recipe.name),
            DetailState::NotFound => f.write_str("not found"),
            DetailState::Failed(e) => write!(f, "failed ({})", e),
        }
    }
}
