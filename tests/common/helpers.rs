use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use headway::{ColorScheme, ProgressDisplay, ProgressDisplayBuilder};

/// An in-memory sink that keeps its contents readable from the test body.
///
/// Cloning shares the underlying buffer, so the test can hand one handle
/// to the display and keep another to inspect what was written.
#[derive(Clone, Default)]
pub struct SharedSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        SharedSink::default()
    }

    /// Everything written so far, decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// The most recent frame: whatever follows the last carriage return.
    pub fn last_frame(&self) -> String {
        self.contents()
            .rsplit('\r')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    /// Number of frames written so far.
    pub fn frame_count(&self) -> usize {
        self.contents().matches('\r').count()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that rejects every write, simulating a closed stream.
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// Creates a plain display of the given geometry writing into a [`SharedSink`]
pub fn create_buffered_display(total: u64, bar_width: usize) -> (ProgressDisplay, SharedSink) {
    let sink = SharedSink::new();
    let display = ProgressDisplayBuilder::new()
        .bar_width(bar_width)
        .sink(sink.clone())
        .build(total)
        .expect("Failed to build progress display");
    (display, sink)
}

/// Creates a display with custom glyphs writing into a [`SharedSink`]
pub fn create_glyph_display(
    total: u64,
    bar_width: usize,
    fill: char,
    empty: char,
    spinner: &str,
) -> (ProgressDisplay, SharedSink) {
    let sink = SharedSink::new();
    let display = ProgressDisplayBuilder::new()
        .bar_width(bar_width)
        .glyphs(fill, empty)
        .spinner_glyphs(spinner)
        .sink(sink.clone())
        .build(total)
        .expect("Failed to build progress display");
    (display, sink)
}

/// Creates a display using the vivid color scheme writing into a [`SharedSink`]
pub fn create_vivid_display(total: u64, bar_width: usize) -> (ProgressDisplay, SharedSink) {
    let sink = SharedSink::new();
    let display = ProgressDisplayBuilder::new()
        .bar_width(bar_width)
        .colors(ColorScheme::vivid())
        .sink(sink.clone())
        .build(total)
        .expect("Failed to build progress display");
    (display, sink)
}

/// Asserts that a plain frame starts with exactly `filled` fill glyphs
/// followed by exactly `empty` empty glyphs and then a space.
pub fn assert_bar(frame: &str, fill: char, filled: usize, empty_glyph: char, empty: usize) {
    let mut expected = String::new();
    expected.extend(std::iter::repeat(fill).take(filled));
    expected.extend(std::iter::repeat(empty_glyph).take(empty));
    expected.push(' ');

    let bar: String = frame.chars().take(filled + empty + 1).collect();
    assert_eq!(
        bar, expected,
        "Bar mismatch in frame {:?}: expected {} filled and {} empty glyphs",
        frame, filled, empty
    );
}

/// Asserts that a plain frame ends with the given status text.
pub fn assert_status(frame: &str, status: &str) {
    assert!(
        frame.trim_end_matches('\n').ends_with(status),
        "Frame {:?} should end with status {:?}",
        frame,
        status
    );
}

/// Returns the spinner glyph of a plain frame rendered with the given bar
/// width, i.e. the character right after the bar and its separator space.
pub fn spinner_glyph(frame: &str, bar_width: usize) -> Option<char> {
    frame.chars().nth(bar_width + 1)
}
