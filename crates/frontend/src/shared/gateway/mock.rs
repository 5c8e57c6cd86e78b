//! Scripted in-memory gateway for tests.

use super::CatalogGateway;
use crate::shared::error::{GatewayError, GatewayResult};
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::a002_animal::aggregate::{Animal, AnimalDto};
use futures::channel::oneshot;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ListCategories,
    ListAnimals,
    CreateCategory(CategoryDto),
    CreateAnimal(AnimalDto),
    UploadImage(String),
}

/// Gateway whose answers are set up front by the test.
///
/// Uploads take the file name as their "file" and, unless scripted, answer
/// `https://img.example/<file>`. Animal reads and uploads can be held open
/// with a gate until the test releases them; upload gates queue up, one per
/// upload in call order.
pub struct MockGateway {
    categories: Mutex<GatewayResult<Vec<Category>>>,
    animals: Mutex<GatewayResult<Vec<Animal>>>,
    create_category: Mutex<GatewayResult<bool>>,
    create_animal: Mutex<GatewayResult<bool>>,
    upload: Mutex<Option<GatewayResult<String>>>,
    animals_gate: Mutex<Option<oneshot::Receiver<()>>>,
    upload_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Ok(Vec::new())),
            animals: Mutex::new(Ok(Vec::new())),
            create_category: Mutex::new(Ok(true)),
            create_animal: Mutex::new(Ok(true)),
            upload: Mutex::new(None),
            animals_gate: Mutex::new(None),
            upload_gates: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.set_categories(Ok(categories));
        self
    }

    pub fn with_animals(self, animals: Vec<Animal>) -> Self {
        self.set_animals(Ok(animals));
        self
    }

    pub fn set_categories(&self, result: GatewayResult<Vec<Category>>) {
        *self.categories.lock().unwrap() = result;
    }

    pub fn set_animals(&self, result: GatewayResult<Vec<Animal>>) {
        *self.animals.lock().unwrap() = result;
    }

    pub fn set_create_category(&self, result: GatewayResult<bool>) {
        *self.create_category.lock().unwrap() = result;
    }

    pub fn set_create_animal(&self, result: GatewayResult<bool>) {
        *self.create_animal.lock().unwrap() = result;
    }

    pub fn set_upload(&self, result: GatewayResult<String>) {
        *self.upload.lock().unwrap() = Some(result);
    }

    /// Hold the next animal read until the returned sender fires
    pub fn gate_animals(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.animals_gate.lock().unwrap() = Some(rx);
        tx
    }

    /// Hold the next ungated upload until the returned sender fires
    pub fn gate_upload(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.upload_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&MockCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn pass_gate(rx: Option<oneshot::Receiver<()>>) {
        if let Some(rx) = rx {
            let _ = rx.await;
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl CatalogGateway for MockGateway {
    type Upload = String;

    async fn fetch_categories(&self) -> GatewayResult<Vec<Category>> {
        self.record(MockCall::ListCategories);
        self.categories.lock().unwrap().clone()
    }

    async fn fetch_animals(&self) -> GatewayResult<Vec<Animal>> {
        self.record(MockCall::ListAnimals);
        let gate = self.animals_gate.lock().unwrap().take();
        Self::pass_gate(gate).await;
        self.animals.lock().unwrap().clone()
    }

    async fn create_category(&self, dto: &CategoryDto) -> GatewayResult<bool> {
        self.record(MockCall::CreateCategory(dto.clone()));
        self.create_category.lock().unwrap().clone()
    }

    async fn create_animal(&self, dto: &AnimalDto) -> GatewayResult<bool> {
        self.record(MockCall::CreateAnimal(dto.clone()));
        self.create_animal.lock().unwrap().clone()
    }

    async fn upload_image(&self, file: String) -> GatewayResult<String> {
        self.record(MockCall::UploadImage(file.clone()));
        let gate = self.upload_gates.lock().unwrap().pop_front();
        Self::pass_gate(gate).await;
        match self.upload.lock().unwrap().clone() {
            Some(result) => result,
            None => Ok(format!("https://img.example/{file}")),
        }
    }
}

pub fn network_error() -> GatewayError {
    GatewayError::Network("connection refused".to_string())
}
