use super::coordinator::CatalogCoordinator;
use crate::domain::a001_category::ui::details::AddCategoryModal;
use crate::domain::a002_animal::ui::details::AddAnimalModal;
use crate::domain::a002_animal::ui::list::AnimalGrid;
use crate::shared::config::CatalogConfig;
use crate::shared::gateway::HttpGateway;
use leptos::prelude::*;

/// Category filter bar, the two "add" dialogs and the animal grid
#[component]
pub fn CatalogPage() -> impl IntoView {
    let coordinator = CatalogCoordinator::new(HttpGateway::new(CatalogConfig::default()));
    let store = coordinator.store();
    coordinator.refresh();

    view! {
        <main class="catalog">
            <div class="catalog__toolbar">
                <div class="catalog__filters">
                    {move || {
                        store
                            .categories
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, category)| {
                                view! {
                                    <button
                                        class="pill-button catalog__filter"
                                        class:catalog__filter--active=move || store.active_index() == Some(index)
                                        on:click=move |_| store.set_active_filter(Some(index))
                                    >
                                        {category.title}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="catalog__actions">
                    <AddAnimalModal coordinator=coordinator.clone() />
                    <AddCategoryModal coordinator=coordinator />
                </div>
            </div>
            <AnimalGrid animals=store.filtered />
        </main>
    }
}
