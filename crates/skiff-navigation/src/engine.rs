//! Engine view contract
//!
//! The engine owns page state, navigation history and rendering. The shell
//! only issues commands and reads back what the engine reports, so
//! can-go-back / is-loading flags are never duplicated here.

/// Static RGBA8 capture of a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Fully transparent surface of the given size
    pub fn blank(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![0; width as usize * height as usize * 4])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Handle to one embedded web view.
///
/// Navigation calls are fire-and-forget: results come back later as
/// progress, URL-changed and load-finished notifications. Calls that do not
/// apply (back with empty history, stop while idle) are no-ops defined by
/// the engine.
pub trait EngineView {
    /// Start loading `url`
    fn load(&mut self, url: &str);

    fn back(&mut self);

    fn forward(&mut self);

    fn reload(&mut self);

    /// Best-effort request to abort the in-flight load
    fn stop(&mut self);

    /// Replace the current URL without going through the load pipeline
    fn set_url(&mut self, url: &str);

    /// Canonical string form of the page URL
    fn current_url(&self) -> String;

    fn title(&self) -> String;

    fn render_surface(&self) -> Raster;
}
