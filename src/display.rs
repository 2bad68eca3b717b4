//! Surfaces which the current count is rendered on.

use std::io;

/// Surface whose textual content is replaced by the rendered count.
#[cfg_attr(test, mockall::automock)]
pub trait CountDisplay {
    /// Replaces the content of this surface with the provided `count`.
    ///
    /// # Errors
    ///
    /// If the underlying surface fails to render.
    fn show(&mut self, count: i64) -> io::Result<()>;
}

/// In-memory [`CountDisplay`] holding the last rendered text.
#[derive(Clone, Debug, Default)]
pub struct TextDisplay(String);

impl TextDisplay {
    /// Returns the currently rendered text. Empty if nothing was rendered yet.
    #[inline]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl CountDisplay for TextDisplay {
    fn show(&mut self, count: i64) -> io::Result<()> {
        self.0 = count.to_string();
        Ok(())
    }
}

/// [`CountDisplay`] writing every rendered count as a separate line.
#[derive(Debug)]
pub struct WriterDisplay<W>(W);

impl<W: io::Write> WriterDisplay<W> {
    /// Creates new [`WriterDisplay`] rendering into the provided writer.
    #[inline]
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Returns the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: io::Write> CountDisplay for WriterDisplay<W> {
    fn show(&mut self, count: i64) -> io::Result<()> {
        writeln!(self.0, "{}", count)?;
        self.0.flush()
    }
}
