use crate::error::{Error, Result};
use iced::widget::image::Handle;

/// Stand-in for every "processed" or "measured" image the shell shows.
pub const PLACEHOLDER_URL: &str =
    "https://images.unsplash.com/photo-1569429593410-b498b3fb3387?auto=format&fit=crop&w=800";

const USER_AGENT: &str = concat!("LandSense/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default)]
pub enum Placeholder {
    #[default]
    Pending,
    Loaded(Handle),
    Unavailable,
}

impl Placeholder {
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Placeholder::Loaded(handle) => Some(handle),
            Placeholder::Pending | Placeholder::Unavailable => None,
        }
    }

    pub fn from_fetch(result: Result<Vec<u8>>) -> Self {
        match result {
            Ok(bytes) => {
                log::info!("Placeholder image loaded ({} bytes)", bytes.len());
                Placeholder::Loaded(Handle::from_bytes(bytes))
            }
            Err(err) => {
                log::warn!("Placeholder image unavailable: {err}");
                Placeholder::Unavailable
            }
        }
    }
}

pub async fn fetch(url: &'static str) -> Result<Vec<u8>> {
    log::debug!("Fetching placeholder image from {url}");
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_has_no_handle() {
        assert!(Placeholder::default().handle().is_none());
    }

    #[test]
    fn failed_fetch_is_unavailable() {
        let state = Placeholder::from_fetch(Err(Error::Network("offline".into())));
        assert!(matches!(state, Placeholder::Unavailable));
        assert!(state.handle().is_none());
    }

    #[test]
    fn successful_fetch_yields_handle() {
        let state = Placeholder::from_fetch(Ok(vec![0xFF, 0xD8, 0xFF]));
        assert!(state.handle().is_some());
    }
}
