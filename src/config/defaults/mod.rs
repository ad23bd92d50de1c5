pub mod values;

// Export the default values
pub use values::*;
