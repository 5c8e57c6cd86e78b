use super::view_model::AnimalFormViewModel;
use crate::catalog::CatalogCoordinator;
use crate::shared::components::ui::{Input, Select};
use crate::shared::gateway::CatalogGateway;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

#[component]
pub fn AddAnimalModal<G>(coordinator: CatalogCoordinator<G>) -> impl IntoView
where
    G: CatalogGateway<Upload = web_sys::File> + 'static,
{
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let vm = AnimalFormViewModel::new();
    let categories = coordinator.store().categories;

    let category_options = Signal::derive(move || {
        categories
            .get()
            .into_iter()
            .map(|c| (c.id.as_string(), c.title))
            .collect::<Vec<_>>()
    });

    let handle_file = {
        let coordinator = coordinator.clone();
        move |ev: leptos::ev::Event| {
            let input: HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let name = file.name();
            vm.upload_command(coordinator.clone(), notifications, file, name);
        }
    };

    let handle_save = move |_| vm.save_command(coordinator.clone(), notifications);

    view! {
        <button class="pill-button" on:click=move |_| vm.open.set(true)>
            {icon("plus")}
            "Add Animal"
        </button>
        <Dialog open=vm.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add Animal"</DialogTitle>
                    <DialogContent>
                        <div class="animal-form">
                            <Input
                                id="name"
                                value=Signal::derive(move || vm.form.get().title)
                                on_input=Callback::new(move |v| vm.set_title(v))
                                placeholder="Name"
                            />
                            <Select
                                value=Signal::derive(move || vm.form.get().category_id)
                                on_change=Callback::new(move |v| vm.set_category(v))
                                options=category_options
                                placeholder="Select a category"
                            />
                            <label for="fileInput" class="file-picker">
                                <input
                                    type="file"
                                    id="fileInput"
                                    class="file-picker__input"
                                    accept="image/*"
                                    on:change=handle_file
                                />
                                <span class="file-picker__name">
                                    {move || vm.file_name.get().unwrap_or_default()}
                                </span>
                                <span class="file-picker__button">
                                    {icon("upload")}
                                    "upload"
                                </span>
                            </label>
                            {move || vm.error.get().map(|e| view! { <p class="error">{e}</p> })}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=Signal::derive(move || vm.uploading.is_busy())
                        >
                            {move || vm.submit_label()}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
