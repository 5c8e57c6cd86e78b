use contracts::domain::a002_animal::aggregate::Animal;
use leptos::prelude::*;

#[component]
pub fn AnimalGrid(#[prop(into)] animals: Signal<Vec<Animal>>) -> impl IntoView {
    view! {
        <div class="animal-grid">
            <For
                each=move || animals.get()
                key=|animal| animal.id.clone()
                children=|animal| view! { <AnimalCard animal /> }
            />
        </div>
    }
}

#[component]
fn AnimalCard(animal: Animal) -> impl IntoView {
    view! {
        <div class="animal-card">
            <div class="animal-card__frame">
                <img class="animal-card__image" src=animal.image alt="animal.png" />
            </div>
            <h2 class="animal-card__title">{animal.title.to_uppercase()}</h2>
        </div>
    }
}
