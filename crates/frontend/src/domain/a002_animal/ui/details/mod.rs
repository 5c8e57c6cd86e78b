mod view;
pub mod view_model;

pub use view::AddAnimalModal;
pub use view_model::AnimalFormViewModel;
