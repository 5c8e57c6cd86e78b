use crate::catalog::CatalogCoordinator;
use crate::shared::busy::BusyCounter;
use crate::shared::gateway::CatalogGateway;
use crate::shared::notifications::NotificationService;
use crate::shared::submit::SubmitOutcome;
use contracts::domain::a002_animal::aggregate::AnimalDto;
use leptos::prelude::*;

const UPLOAD_FAILED: &str = "Error uploading image. Please try again.";
const UPLOAD_PENDING: &str = "Please wait for the image upload to finish";

/// ViewModel for the "Add Animal" dialog.
///
/// `form.image` stays empty until an upload resolves, which is what blocks
/// submission before the image is hosted. `uploading` counts the uploads and
/// the create request in flight. When files are picked in quick succession
/// only the latest pick is applied to the form.
#[derive(Clone, Copy)]
pub struct AnimalFormViewModel {
    pub form: RwSignal<AnimalDto>,
    pub open: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub uploading: BusyCounter,
    pub file_name: RwSignal<Option<String>>,
    latest_upload: RwSignal<u64>,
}

impl AnimalFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AnimalDto::default()),
            open: RwSignal::new(false),
            error: RwSignal::new(None),
            uploading: BusyCounter::new(),
            file_name: RwSignal::new(None),
            latest_upload: RwSignal::new(0),
        }
    }

    pub fn set_title(&self, title: String) {
        self.form.update(|f| f.title = title);
    }

    pub fn set_category(&self, category_id: String) {
        self.form.update(|f| f.category_id = category_id);
    }

    pub fn submit_label(&self) -> &'static str {
        if self.uploading.is_busy() {
            "Uploading..."
        } else {
            "Create Animal"
        }
    }

    /// Push the picked file to the image host and remember its URL.
    ///
    /// Returns `false` on failure, and also when a later pick superseded this
    /// one before it resolved.
    pub async fn upload<G: CatalogGateway + 'static>(
        &self,
        coordinator: &CatalogCoordinator<G>,
        notifications: NotificationService,
        file: G::Upload,
        file_name: String,
    ) -> bool {
        let generation = self
            .latest_upload
            .try_update(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default();
        let result = {
            let _busy = self.uploading.acquire();
            coordinator.gateway().upload_image(file).await
        };

        if self.latest_upload.try_get_untracked() != Some(generation) {
            log::debug!("Dropping superseded upload of {}", file_name);
            return false;
        }

        match result {
            Ok(url) => {
                log::debug!("Image uploaded: {}", url);
                let _ = self.form.try_update(|f| f.image = url);
                let _ = self.file_name.try_set(Some(file_name));
                true
            }
            Err(e) => {
                log::error!("Error uploading image: {}", e);
                let _ = self.error.try_set(Some(UPLOAD_FAILED.to_string()));
                notifications.error(UPLOAD_FAILED);
                false
            }
        }
    }

    /// Validate, create, and reload the catalog on success
    pub async fn save<G: CatalogGateway + 'static>(
        &self,
        coordinator: &CatalogCoordinator<G>,
        notifications: NotificationService,
    ) -> SubmitOutcome {
        if self.uploading.is_busy_untracked() {
            self.error.set(Some(UPLOAD_PENDING.to_string()));
            return SubmitOutcome::Rejected(UPLOAD_PENDING.to_string());
        }

        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg.clone()));
            return SubmitOutcome::Rejected(msg);
        }
        self.error.set(None);

        let accepted = {
            let _busy = self.uploading.acquire();
            coordinator.gateway().create_animal(&current).await
        };

        match accepted {
            Ok(true) => {
                log::info!("Animal created: {}", current.title);
                notifications.success("Animal added successfully");
                let _ = self.open.try_set(false);
                let _ = self.form.try_update(|f| f.title.clear());
                coordinator.reload().await;
                SubmitOutcome::Saved
            }
            Ok(false) => {
                log::error!("Animal rejected by the API: {}", current.title);
                notifications.error("Failed to add animal");
                SubmitOutcome::Failed
            }
            Err(e) => {
                log::error!("Error adding animal: {}", e);
                notifications.error("Failed to add animal");
                SubmitOutcome::Failed
            }
        }
    }

    pub fn upload_command<G: CatalogGateway + 'static>(
        &self,
        coordinator: CatalogCoordinator<G>,
        notifications: NotificationService,
        file: G::Upload,
        file_name: String,
    ) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            vm.upload(&coordinator, notifications, file, file_name).await;
        });
    }

    pub fn save_command<G: CatalogGateway + 'static>(
        &self,
        coordinator: CatalogCoordinator<G>,
        notifications: NotificationService,
    ) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            vm.save(&coordinator, notifications).await;
        });
    }
}

impl Default for AnimalFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
