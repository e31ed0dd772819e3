pub mod fragment;

// Section renderers, one per dashboard section
pub mod crypto;
pub mod funds;
pub mod stocks;
pub mod timeline;
