//! Application Layer
//!
//! Use cases orchestrating the repositories and the auth services.

pub mod admin_directory;
pub mod create_vendor;
pub mod foods;
pub mod offers;
pub mod orders;
pub mod vendor_login;
pub mod vendor_profile;

// Re-exports
pub use admin_directory::AdminDirectoryUseCase;
pub use create_vendor::{CreateVendorInput, CreateVendorUseCase};
pub use foods::{CreateFoodInput, FoodUseCase};
pub use offers::VendorOffersUseCase;
pub use orders::{ProcessOrderInput, VendorOrdersUseCase};
pub use vendor_login::{VendorLoginInput, VendorLoginOutput, VendorLoginUseCase};
pub use vendor_profile::{EditVendorInput, VendorProfileUseCase};
