use crate::catalog::CatalogCoordinator;
use crate::shared::busy::BusyCounter;
use crate::shared::gateway::CatalogGateway;
use crate::shared::notifications::NotificationService;
use crate::shared::submit::SubmitOutcome;
use contracts::domain::a001_category::aggregate::CategoryDto;
use leptos::prelude::*;

/// ViewModel for the "Add Category" dialog
#[derive(Clone, Copy)]
pub struct CategoryFormViewModel {
    pub form: RwSignal<CategoryDto>,
    pub open: RwSignal<bool>,
    pub submitting: BusyCounter,
}

impl CategoryFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryDto::default()),
            open: RwSignal::new(false),
            submitting: BusyCounter::new(),
        }
    }

    pub fn set_title(&self, title: String) {
        self.form.update(|f| f.title = title);
    }

    /// Validate, create, and reload the catalog on success.
    ///
    /// The dialog stays open with its input intact unless the API confirms.
    pub async fn save<G: CatalogGateway + 'static>(
        &self,
        coordinator: &CatalogCoordinator<G>,
        notifications: NotificationService,
    ) -> SubmitOutcome {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            notifications.error(msg.clone());
            return SubmitOutcome::Rejected(msg);
        }

        let accepted = {
            let _busy = self.submitting.acquire();
            coordinator.gateway().create_category(&current).await
        };

        match accepted {
            Ok(true) => {
                log::info!("Category created: {}", current.title);
                notifications.success("Category added successfully");
                let _ = self.form.try_set(CategoryDto::default());
                let _ = self.open.try_set(false);
                coordinator.reload().await;
                SubmitOutcome::Saved
            }
            Ok(false) => {
                log::error!("Category rejected by the API: {}", current.title);
                notifications.error("An error occurred");
                SubmitOutcome::Failed
            }
            Err(e) => {
                log::error!("Error creating category: {}", e);
                notifications.error("An error occurred");
                SubmitOutcome::Failed
            }
        }
    }

    pub fn save_command<G: CatalogGateway + 'static>(
        &self,
        coordinator: CatalogCoordinator<G>,
        notifications: NotificationService,
    ) {
        if self.submitting.is_busy_untracked() {
            return;
        }
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            vm.save(&coordinator, notifications).await;
        });
    }
}

impl Default for CategoryFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
