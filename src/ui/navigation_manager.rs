//! Stepping through an externally owned image list.
//!
//! The [`Navigator`] never owns the list. Every call that needs it borrows a
//! [`RowProvider`], so the navigator cannot outlive the list's owner and a
//! removed row is caught at the next lookup.
//!
//! A step decodes the target image before anything is committed: on failure
//! the position, buffers and title stay exactly as they were.

use std::mem;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::config::IMAGE_CACHE_SIZE;
use crate::core::image_cache::ImageCache;
use crate::core::image_list::{RowId, RowProvider};
use crate::core::image_loader::{DisplayBuffer, SizeVariant};
use crate::core::scaling::ScaleBounds;
use crate::error::Result;
use crate::i18n::en::TITLE_PLACEHOLDER;
use crate::ui::surface::DisplaySurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Everything a viewer window can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Previous,
    Next,
    OriginalSize,
    ScaledSize,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The position moved to a neighbouring row.
    Moved,
    /// No neighbour in that direction; nothing changed.
    AtEnd,
    Rendered,
    Closed,
}

pub struct Navigator {
    current_row: RowId,
    buffers: DisplayBuffer,
    title: String,
    variant: SizeVariant,
    bounds: ScaleBounds,
    cache: ImageCache,
}

impl Navigator {
    /// Opens at `start_row`, decoding its image and showing the scaled variant.
    pub fn open<L, S>(list: &L, start_row: RowId, bounds: ScaleBounds, surface: &mut S) -> Result<Self>
    where
        L: RowProvider + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        let path = list.path_for_row(start_row)?;
        let buffers = DisplayBuffer::load(&path, bounds)?;

        let mut navigator = Self {
            current_row: start_row,
            title: title_for_path(&path),
            buffers,
            variant: SizeVariant::Scaled,
            bounds,
            cache: ImageCache::new(IMAGE_CACHE_SIZE),
        };
        navigator.refresh_after_navigation(surface);

        info!(path = %path.display(), "viewer opened");
        Ok(navigator)
    }

    pub fn current_row(&self) -> RowId {
        self.current_row
    }

    pub fn current_path<L: RowProvider + ?Sized>(&self, list: &L) -> Result<PathBuf> {
        list.path_for_row(self.current_row)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn variant(&self) -> SizeVariant {
        self.variant
    }

    pub fn buffers(&self) -> &DisplayBuffer {
        &self.buffers
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ImageCache {
        &mut self.cache
    }

    pub fn can_go_previous<L: RowProvider + ?Sized>(&self, list: &L) -> bool {
        list.previous_row(self.current_row).is_some()
    }

    pub fn can_go_next<L: RowProvider + ?Sized>(&self, list: &L) -> bool {
        list.next_row(self.current_row).is_some()
    }

    /// Moves one row in `direction`. Returns `Ok(false)` at either end of the
    /// list; returns an error, leaving everything untouched, if the current
    /// or target row does not resolve or the target does not decode.
    pub fn step<L, S>(&mut self, list: &L, direction: Direction, surface: &mut S) -> Result<bool>
    where
        L: RowProvider + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        list.path_for_row(self.current_row)?;

        let adjacent = match direction {
            Direction::Next => list.next_row(self.current_row),
            Direction::Previous => list.previous_row(self.current_row),
        };
        let Some(row) = adjacent else {
            debug!(?direction, "no image in that direction");
            return Ok(false);
        };

        let path = list.path_for_row(row)?;
        let buffers = self.load_buffers(&path)?;

        self.commit(row, buffers);
        self.refresh_after_navigation(surface);
        Ok(true)
    }

    /// Shows the requested buffer and sizes the surface to it exactly.
    pub fn render<S: DisplaySurface + ?Sized>(&mut self, variant: SizeVariant, surface: &mut S) {
        self.variant = variant;
        let image = self.buffers.get(variant);
        surface.set_image(image);
        surface.resize(image.width(), image.height());
    }

    pub fn handle_event<L, S>(&mut self, list: &L, event: ViewerEvent, surface: &mut S) -> Result<EventOutcome>
    where
        L: RowProvider + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        let moved = |moved: bool| if moved { EventOutcome::Moved } else { EventOutcome::AtEnd };

        match event {
            ViewerEvent::Previous => self.step(list, Direction::Previous, surface).map(moved),
            ViewerEvent::Next => self.step(list, Direction::Next, surface).map(moved),
            ViewerEvent::OriginalSize => {
                self.render(SizeVariant::Original, surface);
                Ok(EventOutcome::Rendered)
            }
            ViewerEvent::ScaledSize => {
                self.render(SizeVariant::Scaled, surface);
                Ok(EventOutcome::Rendered)
            }
            ViewerEvent::Close => Ok(EventOutcome::Closed),
        }
    }

    fn load_buffers(&mut self, path: &Path) -> Result<DisplayBuffer> {
        if let Some(buffers) = self.cache.take(path) {
            debug!(path = %path.display(), "using preloaded image");
            return Ok(buffers);
        }
        DisplayBuffer::load(path, self.bounds)
    }

    fn commit(&mut self, row: RowId, buffers: DisplayBuffer) {
        let previous = mem::replace(&mut self.buffers, buffers);
        self.cache.insert(previous.source().to_path_buf(), previous);
        self.current_row = row;
        self.title = title_for_path(self.buffers.source());
    }

    fn refresh_after_navigation<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) {
        surface.set_title(&self.title);
        self.render(SizeVariant::Scaled, surface);
    }
}

/// Base name of `path`, or the generic placeholder when it has none.
pub fn title_for_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}
