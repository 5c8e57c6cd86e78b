use crate::catalog::CatalogPage;
use crate::shared::notifications::{NotificationService, Toaster};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toast sink shared by both forms
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <CatalogPage />
            <Toaster />
        </ConfigProvider>
    }
}
