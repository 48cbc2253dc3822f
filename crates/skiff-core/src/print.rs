//! Print adapter
//!
//! Hardcopy of the current page: confirm with the platform dialog, capture
//! the view, scale it onto the page keeping its aspect ratio, send it.
//! Printer failures are the platform's to report and are passed through.

use serde::{Deserialize, Serialize};
use skiff_navigation::{EngineView, Raster};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrintError {
    #[error("Nothing to print: the page surface is empty")]
    EmptySurface,

    #[error("Printer error: {0}")]
    Device(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The platform's own print pipeline
    #[default]
    Native,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub output: OutputFormat,
    pub document_name: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Native,
            document_name: "Web Page".to_string(),
        }
    }
}

/// Rectangle in device units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PageRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    /// Sent to the printer, drawn into `target`
    Printed { target: PageRect },
    Cancelled,
}

/// Platform print subsystem
pub trait PrintService {
    fn open_dialog(&mut self, config: &PrinterConfig) -> DialogOutcome;

    /// Start a job and return the printable page viewport
    fn begin_job(&mut self) -> Result<PageRect, PrintError>;

    fn draw(&mut self, raster: &Raster, target: PageRect) -> Result<(), PrintError>;

    fn end_job(&mut self) -> Result<(), PrintError>;
}

/// Scale a `width` x `height` surface to the largest size that fits `page`
/// without distortion, anchored at the page origin.
pub fn fit_to_page(width: u32, height: u32, page: PageRect) -> PageRect {
    if width == 0 || height == 0 {
        return PageRect::new(page.x, page.y, 0, 0);
    }

    let (w, h) = (u64::from(width), u64::from(height));
    let (pw, ph) = (u64::from(page.width), u64::from(page.height));

    let width_at_full_height = ph * w / h;
    let (fit_w, fit_h) = if width_at_full_height <= pw {
        (width_at_full_height, ph)
    } else {
        (pw, pw * h / w)
    };

    // Both are bounded by the page dimensions, which are u32
    PageRect::new(page.x, page.y, fit_w as u32, fit_h as u32)
}

/// Print what `view` currently shows.
///
/// The surface is captured only after the dialog is accepted; a cancelled
/// dialog has no side effects.
pub fn print_surface(
    service: &mut dyn PrintService,
    config: &PrinterConfig,
    view: &dyn EngineView,
) -> Result<PrintOutcome, PrintError> {
    if service.open_dialog(config) == DialogOutcome::Cancelled {
        tracing::debug!("Print dialog cancelled");
        return Ok(PrintOutcome::Cancelled);
    }

    let raster = view.render_surface();
    if raster.is_empty() {
        return Err(PrintError::EmptySurface);
    }

    let page = service.begin_job()?;
    let target = fit_to_page(raster.width(), raster.height(), page);
    service.draw(&raster, target)?;
    service.end_job()?;

    tracing::info!(
        document = %config.document_name,
        width = target.width,
        height = target.height,
        "Printed page"
    );

    Ok(PrintOutcome::Printed { target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakePrinter, PrintCall};

    struct StaticView(Raster);

    impl EngineView for StaticView {
        fn load(&mut self, _url: &str) {}
        fn back(&mut self) {}
        fn forward(&mut self) {}
        fn reload(&mut self) {}
        fn stop(&mut self) {}
        fn set_url(&mut self, _url: &str) {}
        fn current_url(&self) -> String {
            String::new()
        }
        fn title(&self) -> String {
            String::new()
        }
        fn render_surface(&self) -> Raster {
            self.0.clone()
        }
    }

    #[test]
    fn test_fit_wide_surface() {
        let page = PageRect::new(10, 20, 600, 800);
        assert_eq!(fit_to_page(1200, 600, page), PageRect::new(10, 20, 600, 300));
    }

    #[test]
    fn test_fit_tall_surface() {
        let page = PageRect::new(0, 0, 600, 800);
        assert_eq!(fit_to_page(100, 400, page), PageRect::new(0, 0, 200, 800));
    }

    #[test]
    fn test_fit_scales_up() {
        let page = PageRect::new(0, 0, 600, 800);
        assert_eq!(fit_to_page(30, 40, page), PageRect::new(0, 0, 600, 800));
    }

    #[test]
    fn test_fit_empty_surface() {
        let page = PageRect::new(5, 5, 600, 800);
        assert_eq!(fit_to_page(0, 40, page), PageRect::new(5, 5, 0, 0));
    }

    #[test]
    fn test_print_accepted() {
        let printer = FakePrinter::accepting(PageRect::new(0, 0, 500, 500));
        let mut service = printer.clone();
        let view = StaticView(Raster::blank(1000, 500));

        let outcome = print_surface(&mut service, &PrinterConfig::default(), &view).unwrap();

        let target = PageRect::new(0, 0, 500, 250);
        assert_eq!(outcome, PrintOutcome::Printed { target });
        assert_eq!(
            printer.calls(),
            vec![
                PrintCall::Dialog,
                PrintCall::Begin,
                PrintCall::Draw {
                    target,
                    source: (1000, 500)
                },
                PrintCall::End
            ]
        );
    }

    #[test]
    fn test_print_cancelled_has_no_side_effects() {
        let printer = FakePrinter::cancelling();
        let mut service = printer.clone();
        let view = StaticView(Raster::blank(10, 10));

        let outcome = print_surface(&mut service, &PrinterConfig::default(), &view).unwrap();
        assert_eq!(outcome, PrintOutcome::Cancelled);
        assert_eq!(printer.calls(), vec![PrintCall::Dialog]);
    }

    #[test]
    fn test_printer_failure_propagates() {
        let printer = FakePrinter::accepting(PageRect::new(0, 0, 500, 500));
        printer.fail_begin("out of paper");
        let mut service = printer.clone();
        let view = StaticView(Raster::blank(10, 10));

        let err = print_surface(&mut service, &PrinterConfig::default(), &view).unwrap_err();
        assert_eq!(err, PrintError::Device("out of paper".to_string()));
        assert!(!printer.calls().contains(&PrintCall::End));
    }

    #[test]
    fn test_empty_surface_never_starts_a_job() {
        let printer = FakePrinter::accepting(PageRect::new(0, 0, 500, 500));
        let mut service = printer.clone();
        let view = StaticView(Raster::blank(0, 0));

        let err = print_surface(&mut service, &PrinterConfig::default(), &view).unwrap_err();
        assert_eq!(err, PrintError::EmptySurface);
        assert_eq!(printer.calls(), vec![PrintCall::Dialog]);
    }
}
