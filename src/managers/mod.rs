//! Resource managers: validation and referential checks in front of the stores.

mod category_manager;
mod product_manager;
mod resource_manager;
mod supplier_manager;
pub mod validation;

pub use category_manager::CategoryManager;
pub use product_manager::ProductManager;
pub use resource_manager::ResourceManager;
pub use supplier_manager::SupplierManager;
