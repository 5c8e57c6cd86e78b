use super::view_model::CategoryFormViewModel;
use crate::catalog::CatalogCoordinator;
use crate::shared::components::ui::Input;
use crate::shared::gateway::CatalogGateway;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddCategoryModal<G: CatalogGateway + 'static>(
    coordinator: CatalogCoordinator<G>,
) -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let vm = CategoryFormViewModel::new();

    let handle_save = move |_| vm.save_command(coordinator.clone(), notifications);

    view! {
        <button class="pill-button" on:click=move |_| vm.open.set(true)>
            {icon("plus")}
            "Add Category"
        </button>
        <Dialog open=vm.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add Category"</DialogTitle>
                    <DialogContent>
                        <Input
                            id="name"
                            value=Signal::derive(move || vm.form.get().title)
                            on_input=Callback::new(move |v| vm.set_title(v))
                            placeholder="Name"
                            required=true
                        />
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=Signal::derive(move || vm.submitting.is_busy())
                        >
                            "Save"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
