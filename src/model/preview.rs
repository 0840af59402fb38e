use iced::widget::image::Handle;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Raw bytes of an image the user selected, before it becomes a preview.
#[derive(Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreviewId(u64);

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Counts previews released by a [`PreviewSlot`]. Clones share the count, so
/// it stays readable after the slot itself is gone.
#[derive(Debug, Clone, Default)]
pub struct ReleaseCounter(Arc<AtomicUsize>);

impl ReleaseCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    fn record(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// A display-only handle to a selected image. Owned exclusively by a
/// [`PreviewSlot`]; never cloned.
pub struct Preview {
    id: PreviewId,
    name: String,
    handle: Handle,
    released: ReleaseCounter,
}

impl Preview {
    pub fn id(&self) -> PreviewId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl Drop for Preview {
    fn drop(&mut self) {
        self.released.record();
        log::debug!("Released preview {} ({})", self.id, self.name);
    }
}

/// Holds at most one live [`Preview`]. A new preview releases the previous
/// one before taking its place, and dropping the slot releases whatever it
/// still holds.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    current: Option<Preview>,
    next_id: u64,
    released: ReleaseCounter,
}

impl PreviewSlot {
    pub fn current(&self) -> Option<&Preview> {
        self.current.as_ref()
    }

    /// Number of previews this slot has released so far.
    pub fn released(&self) -> usize {
        self.released.get()
    }

    #[cfg(test)]
    pub fn release_counter(&self) -> ReleaseCounter {
        self.released.clone()
    }

    pub fn replace(&mut self, file: PickedFile) -> PreviewId {
        self.release();

        let id = PreviewId(self.next_id);
        self.next_id += 1;
        log::info!(
            "Created preview {id} for {} ({} bytes)",
            file.name,
            file.bytes.len()
        );

        self.current = Some(Preview {
            id,
            name: file.name,
            handle: Handle::from_bytes(file.bytes),
            released: self.released.clone(),
        });
        id
    }

    pub fn release(&mut self) {
        if let Some(previous) = self.current.take() {
            drop(previous);
        }
    }
}

impl Drop for PreviewSlot {
    fn drop(&mut self) {
        self.release();
        log::debug!("Preview slot closed after {} release(s)", self.released());
    }
}
