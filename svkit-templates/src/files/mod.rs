//! Generated file types.

mod component;
mod layout;
mod load_script;
mod page;

pub use component::ComponentFile;
pub use layout::LayoutFile;
pub use load_script::LoadScript;
pub use page::PageFile;
