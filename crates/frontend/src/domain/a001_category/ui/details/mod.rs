mod view;
pub mod view_model;

pub use view::AddCategoryModal;
pub use view_model::CategoryFormViewModel;
