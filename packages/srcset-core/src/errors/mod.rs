mod types;

pub use types::SrcsetError;
