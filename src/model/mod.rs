pub mod loader;
pub mod placeholder;
pub mod preview;
pub mod tab;

pub use placeholder::{Placeholder, PLACEHOLDER_URL};
pub use preview::{PickedFile, Preview, PreviewId, PreviewSlot};
pub use tab::Tab;
