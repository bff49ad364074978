pub mod bundle_name;
pub mod validation;

pub use bundle_name::BundleName;
