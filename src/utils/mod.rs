//! Miscellaneous components used in the library.

mod extension_filters;
pub(crate) use extension_filters::keep_subset_maximal;
pub(crate) use extension_filters::keep_undec_minimal;

mod grounded_extension_computer;
pub use grounded_extension_computer::characteristic_function;
pub use grounded_extension_computer::grounded_extension;

pub(crate) mod scc_computer;
