//! Image index within one project's detail view.
//!
//! # Invariants
//! - `current` is `Some(i)` with `i < len` when `len > 0`, `None` otherwise.
//! - A carousel is scoped to one project; switching projects builds a new one.

use crate::error::CarouselError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailCarousel {
    len: usize,
    current: Option<usize>,
}

/// What the image area should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselFrame<'a> {
    Placeholder,
    Image {
        index: usize,
        len: usize,
        url: &'a str,
    },
}

impl DetailCarousel {
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            current: if len == 0 { None } else { Some(0) },
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// Prev/next arrows are only offered when there is somewhere to go.
    pub const fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if let Some(index) = self.current {
            self.current = Some((index + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.current {
            self.current = Some((index + self.len - 1) % self.len);
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = Some(index);
        Ok(())
    }

    /// `(index, is_current)` for each indicator dot.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |index| (index, self.current == Some(index)))
    }

    pub fn frame<'a>(&self, images: &'a [String]) -> CarouselFrame<'a> {
        match self.current.and_then(|index| images.get(index).map(|url| (index, url))) {
            Some((index, url)) => CarouselFrame::Image {
                index,
                len: self.len,
                url,
            },
            None => CarouselFrame::Placeholder,
        }
    }
}
