use crate::error::Error;
use crate::model::{PickedFile, Tab};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    PickImage,
    FileDropped(PathBuf),
    ImagePicked(u64, Option<PickedFile>),
    PlaceholderFetched(Result<Vec<u8>, Error>),
    ToggleTheme,
}
