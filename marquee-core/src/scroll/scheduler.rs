//! Scroll scheduler
//!
//! Both stepping modes share the frame cursor (`start_index`,
//! `start_column`). The incremental mode keeps an extra sweep cursor that
//! walks across the display one letter per call.
//!
//! Every full-frame step and every completed sweep shows the next frame, in
//! any order: a completed sweep leaves its successor pending, which a
//! following full-frame step draws in place, and a sweep that follows a
//! full-frame step starts one column further left.

use super::message::Message;
use super::{Commit, ScrollError, Sweep};
use crate::config::ScrollConfig;
use crate::font::Font;
use crate::render::write_letter;
use crate::traits::PixelDisplay;

/// Which stepping mode last advanced the cursors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepMode {
    FullFrame,
    Incremental,
}

/// Scrolling text state for one display
#[derive(Debug)]
pub struct TextScroll<'f, 'b> {
    font: Font<'f>,
    config: ScrollConfig,
    message: Message<'b>,
    /// Index of the letter at or crossing the left edge
    start_index: usize,
    /// Column of that letter's left edge (may be negative)
    start_column: i32,
    /// Letter the incremental sweep draws next
    partial_index: usize,
    /// Column the incremental sweep draws at next
    partial_column: i32,
    mode: Option<StepMode>,
    /// The frame at `start_column` has not been fully drawn yet
    frame_pending: bool,
}

impl<'f, 'b> TextScroll<'f, 'b> {
    /// Create a scroller over a caller-supplied message buffer
    ///
    /// Any zero-terminated text already in `buffer` becomes the message on
    /// the first [`commit`](Self::commit).
    pub fn new(
        font: Font<'f>,
        buffer: &'b mut [u8],
        config: ScrollConfig,
    ) -> Result<Self, ScrollError> {
        config.validate()?;
        let message = Message::new(buffer, &config)?;

        Ok(Self {
            font,
            config,
            message,
            start_index: 0,
            start_column: 0,
            partial_index: 0,
            partial_column: 0,
            mode: None,
            frame_pending: false,
        })
    }

    /// Commit the text in the buffer and restart scrolling from the beginning
    ///
    /// Clears the display so nothing from the previous message lingers.
    /// On error nothing changes.
    pub fn commit<D>(&mut self, display: &mut D) -> Result<Commit, ScrollError>
    where
        D: PixelDisplay + ?Sized,
    {
        let commit = self.message.commit(&self.font, &self.config)?;

        self.start_index = 0;
        self.start_column = 0;
        self.partial_index = 0;
        self.partial_column = 0;
        self.mode = None;
        self.frame_pending = false;
        display.clear_all();

        #[cfg(feature = "defmt")]
        {
            defmt::info!("Message committed: {} chars", commit.length);
            if commit.truncated {
                defmt::warn!("Message truncated to buffer capacity");
            }
            if commit.substituted > 0 {
                defmt::debug!("{} unknown characters shown as spaces", commit.substituted);
            }
        }

        Ok(commit)
    }

    /// Replace the message text and commit it
    pub fn publish<D>(&mut self, text: &[u8], display: &mut D) -> Result<Commit, ScrollError>
    where
        D: PixelDisplay + ?Sized,
    {
        self.message.set_text(text, &self.font, &self.config)?;
        self.commit(display)
    }

    /// Clear the whole display without touching the scroll position
    pub fn clear_screen<D>(&self, display: &mut D)
    where
        D: PixelDisplay + ?Sized,
    {
        display.clear_all();
    }

    /// Scroll one column left and redraw the full display width
    ///
    /// After a completed incremental sweep the next frame is already
    /// pending, so it is drawn without shifting again. Run time grows with
    /// the display width. Does nothing until a message has been committed.
    pub fn step_display<D>(&mut self, display: &mut D)
    where
        D: PixelDisplay + ?Sized,
    {
        let length = self.message.len();
        if length == 0 {
            return;
        }
        let (width, _) = display.dimensions();
        self.mode = Some(StepMode::FullFrame);

        if !self.frame_pending {
            self.start_column -= 1;
        }
        self.frame_pending = false;
        let mut index = self.start_index;

        let mut written = self.draw(display, index, self.start_column);
        index = (index + 1) % length;

        if written == 0 {
            // Left-most letter has scrolled off; the next one is at the edge
            self.start_index = (self.start_index + 1) % length;
            self.start_column = 0;
        }

        while written < width {
            written += self.draw(display, index, i32::from(written));
            index = (index + 1) % length;
        }
    }

    /// Draw one letter of the current frame
    ///
    /// Bounded to a single letter per call. After enough calls to cover
    /// the display width the frame is complete and the next sweep starts
    /// one column further left.
    pub fn step_display_partial<D>(&mut self, display: &mut D) -> Sweep
    where
        D: PixelDisplay + ?Sized,
    {
        let length = self.message.len();
        let (width, _) = display.dimensions();
        if length == 0 || width == 0 {
            return Sweep::Idle;
        }

        if self.mode == Some(StepMode::FullFrame) {
            // The full-frame step already showed the frame at start_column
            self.start_column -= 1;
            self.frame_pending = true;
            self.partial_index = self.start_index;
            self.partial_column = self.start_column;
        }
        self.mode = Some(StepMode::Incremental);

        let written = i32::from(self.draw(display, self.partial_index, self.partial_column));
        if self.partial_column > 0 {
            self.partial_column += written;
        } else {
            // First letter of a sweep: its visible columns end where the next begins
            self.partial_column = written;
        }
        self.partial_index = (self.partial_index + 1) % length;

        if self.partial_column >= i32::from(width) {
            self.start_column -= 1;
            self.frame_pending = true;
            self.partial_column = self.start_column;
            self.partial_index = self.start_index;
            Sweep::FrameComplete
        } else {
            if self.partial_column <= 0 {
                self.start_index = (self.start_index + 1) % length;
                self.start_column = 0;
            }
            Sweep::InProgress
        }
    }

    fn draw<D>(&self, display: &mut D, index: usize, col: i32) -> u16
    where
        D: PixelDisplay + ?Sized,
    {
        write_letter(&self.font, display, self.message.at(index), col, 0)
    }

    /// Font used for rendering
    pub fn font(&self) -> &Font<'f> {
        &self.font
    }

    /// Active configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Committed message bytes, separator gap included
    pub fn message(&self) -> &[u8] {
        self.message.as_bytes()
    }

    /// Committed length, separator gap included
    pub fn len(&self) -> usize {
        self.message.len()
    }

    /// Check whether a message has been committed
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    /// Index of the letter at or crossing the left display edge
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Column of the left-most letter's left edge
    pub fn start_column(&self) -> i32 {
        self.start_column
    }

    /// Next letter index of the incremental sweep
    pub fn partial_index(&self) -> usize {
        self.partial_index
    }

    /// Next column of the incremental sweep
    pub fn partial_column(&self) -> i32 {
        self.partial_column
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlyphFallback;
    use crate::testing::{Canvas, AB_FONT};

    fn scroller<'b>(buffer: &'b mut [u8]) -> TextScroll<'static, 'b> {
        static FONT: [u8; 18] = AB_FONT;
        let font = Font::load(&FONT).unwrap();
        TextScroll::new(font, buffer, ScrollConfig::default()).unwrap()
    }

    #[test]
    fn test_nothing_drawn_before_commit() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();

        scroll.step_display(&mut canvas);
        assert_eq!(scroll.step_display_partial(&mut canvas), Sweep::Idle);
        assert!(canvas.is_blank());
        assert_eq!(scroll.start_column(), 0);
    }

    #[test]
    fn test_commit_resets_and_clears() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();

        scroll.publish(b"AB", &mut canvas).unwrap();
        for _ in 0..7 {
            scroll.step_display(&mut canvas);
        }
        assert_ne!(scroll.start_index(), 0);

        canvas.fill();
        let commit = scroll.commit(&mut canvas).unwrap();
        assert_eq!(commit.length, 3);
        assert_eq!(scroll.start_index(), 0);
        assert_eq!(scroll.start_column(), 0);
        assert_eq!(scroll.partial_index(), 0);
        assert_eq!(scroll.partial_column(), 0);
        assert!(canvas.is_blank());
        assert_eq!(canvas.clears(), 2);
    }

    #[test]
    fn test_partial_first_frame_layout() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();
        scroll.publish(b"AB", &mut canvas).unwrap();

        assert_eq!(scroll.step_display_partial(&mut canvas), Sweep::InProgress);
        assert_eq!(scroll.partial_column(), 4);
        assert_eq!(scroll.step_display_partial(&mut canvas), Sweep::FrameComplete);

        assert_eq!(canvas.column(0), 0x0001);
        assert_eq!(canvas.column(1), 0x0102);
        assert_eq!(canvas.column(2), 0x0204);
        assert_eq!(canvas.column(3), 0);
        assert_eq!(canvas.column(4), 0x03FF);
        assert_eq!(canvas.column(5), 0x0081);
        assert_eq!(scroll.start_column(), -1);
        assert_eq!(scroll.partial_column(), -1);
        assert_eq!(scroll.partial_index(), 0);
    }

    #[test]
    fn test_full_frame_shifts_one_column() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();
        scroll.publish(b"AB", &mut canvas).unwrap();

        scroll.step_display(&mut canvas);
        assert_eq!(scroll.start_column(), -1);
        assert_eq!(canvas.column(0), 0x0102);
        assert_eq!(canvas.column(1), 0x0204);
        assert_eq!(canvas.column(2), 0);
        assert_eq!(canvas.column(3), 0x03FF);
        assert_eq!(canvas.column(4), 0x0081);
        assert_eq!(canvas.column(5), 0);
        assert_eq!(canvas.writes_outside(), 0);
    }

    #[test]
    fn test_full_frame_wraps_start_index() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();
        scroll.publish(b"AB", &mut canvas).unwrap();

        // 'A' spans 4 columns with its separator
        for _ in 0..3 {
            scroll.step_display(&mut canvas);
            assert_eq!(scroll.start_index(), 0);
        }
        scroll.step_display(&mut canvas);
        assert_eq!(scroll.start_index(), 1);
        assert_eq!(scroll.start_column(), 0);
        assert_eq!(canvas.column(0), 0x03FF);
    }

    #[test]
    fn test_full_frame_then_incremental_shows_next_frame() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();
        scroll.publish(b"AB", &mut canvas).unwrap();

        let mut reference_buffer = [0u8; 8];
        let mut reference = scroller(&mut reference_buffer);
        let mut expected = Canvas::<6, 10>::new();
        reference.publish(b"AB", &mut expected).unwrap();

        scroll.step_display(&mut canvas);
        scroll.step_display(&mut canvas);
        while scroll.step_display_partial(&mut canvas) != Sweep::FrameComplete {}

        for _ in 0..3 {
            reference.step_display(&mut expected);
        }
        assert!(canvas.same_pixels(&expected));
        assert_eq!(scroll.start_column(), -4);
    }

    #[test]
    fn test_incremental_then_full_frame_shows_next_frame() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();
        scroll.publish(b"AB", &mut canvas).unwrap();

        let mut reference_buffer = [0u8; 8];
        let mut reference = scroller(&mut reference_buffer);
        let mut expected = Canvas::<6, 10>::new();
        reference.publish(b"AB", &mut expected).unwrap();

        // Sweeps show frames 0 and -1, leaving -2 pending
        for _ in 0..2 {
            while scroll.step_display_partial(&mut canvas) != Sweep::FrameComplete {}
        }
        assert_eq!(scroll.start_column(), -2);
        reference.step_display(&mut expected);

        for step in 0..6 {
            scroll.step_display(&mut canvas);
            reference.step_display(&mut expected);
            assert!(canvas.same_pixels(&expected), "step {step}");
            assert_eq!(scroll.start_column(), reference.start_column());
            assert_eq!(scroll.start_index(), reference.start_index());
        }
    }

    #[test]
    fn test_interrupted_sweep_finished_by_full_frame() {
        let mut buffer = [0u8; 8];
        let mut scroll = scroller(&mut buffer);
        let mut canvas = Canvas::<6, 10>::new();
        scroll.publish(b"AB", &mut canvas).unwrap();

        let mut reference_buffer = [0u8; 8];
        let mut reference = scroller(&mut reference_buffer);
        let mut expected = Canvas::<6, 10>::new();
        reference.publish(b"AB", &mut expected).unwrap();

        while scroll.step_display_partial(&mut canvas) != Sweep::FrameComplete {}
        assert_eq!(scroll.step_display_partial(&mut canvas), Sweep::InProgress);
        scroll.step_display(&mut canvas);

        reference.step_display(&mut expected);
        assert!(canvas.same_pixels(&expected));
        assert_eq!(scroll.start_column(), -1);
    }

    #[test]
    fn test_reject_policy_keeps_previous_message() {
        let mut buffer = [0u8; 8];
        let font = Font::load(&AB_FONT).unwrap();
        let config = ScrollConfig {
            fallback: GlyphFallback::Reject,
            ..Default::default()
        };
        let mut scroll = TextScroll::new(font, &mut buffer, config).unwrap();
        let mut canvas = Canvas::<6, 10>::new();

        scroll.publish(b"BA", &mut canvas).unwrap();
        scroll.step_display(&mut canvas);

        let err = scroll.publish(b"B!", &mut canvas).unwrap_err();
        assert_eq!(err, ScrollError::OutOfRangeCharacter { index: 1, byte: b'!' });
        assert_eq!(scroll.message(), b"BA ");
        assert_eq!(scroll.start_column(), -1);
        assert_eq!(canvas.clears(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut buffer = [0u8; 8];
        let font = Font::load(&AB_FONT).unwrap();
        let config = ScrollConfig {
            separator_gap: 0,
            ..Default::default()
        };
        let err = TextScroll::new(font, &mut buffer, config).unwrap_err();
        assert_eq!(
            err,
            ScrollError::Config(crate::config::ConfigError::ZeroSeparatorGap)
        );
    }
}
