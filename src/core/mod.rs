pub mod registry;
pub mod tax;

pub use crate::domain::model::{DeleteResponse, Developer, DeveloperRequest, Experience};
pub use crate::domain::ports::{ConfigProvider, Taxable};
pub use crate::utils::error::Result;
pub use registry::DeveloperRegistry;
pub use tax::TaxPolicy;
