use super::state::{active_index, filter_animals, toggle_filter};
use crate::shared::gateway::CatalogGateway;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a002_animal::aggregate::Animal;
use leptos::prelude::*;
use std::sync::Arc;

/// Reactive snapshot of the catalog.
///
/// `filtered` is a memo over all three inputs, so it is recomputed from
/// scratch whenever any of them changes.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub categories: RwSignal<Vec<Category>>,
    pub animals: RwSignal<Vec<Animal>>,
    pub active_filter: RwSignal<Option<CategoryId>>,
    pub filtered: Memo<Vec<Animal>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let categories = RwSignal::new(Vec::<Category>::new());
        let animals = RwSignal::new(Vec::<Animal>::new());
        let active_filter = RwSignal::new(None::<CategoryId>);
        let filtered = Memo::new(move |_| {
            let active = active_filter.get();
            categories.with(|cats| animals.with(|all| filter_animals(all, cats, active.as_ref())))
        });

        Self {
            categories,
            animals,
            active_filter,
            filtered,
        }
    }

    /// Toggle the filter by list position; `None` clears it
    pub fn set_active_filter(&self, index: Option<usize>) {
        let categories = self.categories.get_untracked();
        let next = self
            .active_filter
            .with_untracked(|current| toggle_filter(&categories, current.as_ref(), index));
        self.active_filter.set(next);
    }

    /// Position of the highlighted category button (tracked)
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active_filter.get();
        self.categories.with(|cats| active_index(cats, active.as_ref()))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the catalog snapshot and keeps it in sync with the API.
pub struct CatalogCoordinator<G: CatalogGateway> {
    gateway: Arc<G>,
    store: CatalogStore,
}

impl<G: CatalogGateway> Clone for CatalogCoordinator<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            store: self.store,
        }
    }
}

impl<G: CatalogGateway + 'static> CatalogCoordinator<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_store(Arc::new(gateway), CatalogStore::new())
    }

    pub fn with_store(gateway: Arc<G>, store: CatalogStore) -> Self {
        Self { gateway, store }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> CatalogStore {
        self.store
    }

    pub async fn load_categories(&self) {
        let categories = self.gateway.list_categories().await;
        log::debug!("Loaded {} categories", categories.len());
        let _ = self.store.categories.try_set(categories);
    }

    pub async fn load_animals(&self) {
        let animals = self.gateway.list_animals().await;
        log::debug!("Loaded {} animals", animals.len());
        let _ = self.store.animals.try_set(animals);
    }

    /// Fetch both lists concurrently; each slot is written as soon as its
    /// own request resolves.
    pub async fn reload(&self) {
        futures::join!(self.load_categories(), self.load_animals());
    }

    /// Fire-and-forget variant of [`Self::reload`] as two independent tasks
    pub fn refresh(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.load_categories().await });
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.load_animals().await });
    }
}
