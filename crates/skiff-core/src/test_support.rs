//! Recording fakes for the engine, toolkit and printer seams

use parking_lot::Mutex;
use skiff_navigation::{EngineError, EngineView, Raster};
use skiff_session::WindowId;
use skiff_tabs::TabId;
use std::collections::HashMap;
use std::sync::Arc;

use crate::browser::Browser;
use crate::config::Config;
use crate::events::Notifier;
use crate::platform::{EngineFactory, HeadlessToolkit};
use crate::print::{DialogOutcome, PageRect, PrintError, PrintService, PrinterConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Load(String),
    Back,
    Forward,
    Reload,
    Stop,
    SetUrl(String),
}

#[derive(Default)]
struct Page {
    url: String,
    title: String,
}

#[derive(Default)]
struct EngineLog {
    calls: Vec<(TabId, EngineCall)>,
    pages: HashMap<TabId, Page>,
    notifiers: HashMap<TabId, Notifier>,
    released: Vec<TabId>,
    fail_next: bool,
    surface: Option<(u32, u32)>,
}

/// Engine factory whose views record every call into a shared log
#[derive(Clone, Default)]
pub struct FakeEngines {
    log: Arc<Mutex<EngineLog>>,
}

impl FakeEngines {
    pub fn calls_for(&self, tab: TabId) -> Vec<EngineCall> {
        self.log
            .lock()
            .calls
            .iter()
            .filter(|(id, _)| *id == tab)
            .map(|(_, call)| call.clone())
            .collect()
    }

    pub fn loads(&self, tab: TabId) -> Vec<String> {
        self.calls_for(tab)
            .into_iter()
            .filter_map(|call| match call {
                EngineCall::Load(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn total_calls(&self) -> usize {
        self.log.lock().calls.len()
    }

    pub fn released(&self) -> Vec<TabId> {
        self.log.lock().released.clone()
    }

    /// What the engine will report as the page URL and title of `tab`
    pub fn set_page(&self, tab: TabId, url: &str, title: &str) {
        let mut log = self.log.lock();
        let page = log.pages.entry(tab).or_default();
        page.url = url.to_string();
        page.title = title.to_string();
    }

    pub fn notifier(&self, tab: TabId) -> Notifier {
        self.log.lock().notifiers[&tab].clone()
    }

    pub fn fail_next(&self) {
        self.log.lock().fail_next = true;
    }

    pub fn set_surface(&self, width: u32, height: u32) {
        self.log.lock().surface = Some((width, height));
    }
}

impl EngineFactory for FakeEngines {
    fn create_view(&mut self, notifier: Notifier) -> Result<Box<dyn EngineView>, EngineError> {
        let mut log = self.log.lock();
        if std::mem::take(&mut log.fail_next) {
            return Err(EngineError::Connect {
                signal: "loadFinished",
            });
        }

        let tab = notifier.tab();
        log.notifiers.insert(tab, notifier);
        log.pages.insert(tab, Page::default());

        Ok(Box::new(FakeView {
            tab,
            log: Arc::clone(&self.log),
        }))
    }
}

struct FakeView {
    tab: TabId,
    log: Arc<Mutex<EngineLog>>,
}

impl FakeView {
    fn record(&self, call: EngineCall) {
        self.log.lock().calls.push((self.tab, call));
    }

    fn page<T>(&self, f: impl FnOnce(&Page) -> T) -> T {
        let log = self.log.lock();
        let page = log.pages.get(&self.tab);
        match page {
            Some(page) => f(page),
            None => f(&Page::default()),
        }
    }
}

impl EngineView for FakeView {
    fn load(&mut self, url: &str) {
        self.record(EngineCall::Load(url.to_string()));
    }
    fn back(&mut self) {
        self.record(EngineCall::Back);
    }
    fn forward(&mut self) {
        self.record(EngineCall::Forward);
    }
    fn reload(&mut self) {
        self.record(EngineCall::Reload);
    }
    fn stop(&mut self) {
        self.record(EngineCall::Stop);
    }
    fn set_url(&mut self, url: &str) {
        self.record(EngineCall::SetUrl(url.to_string()));
    }
    fn current_url(&self) -> String {
        self.page(|page| page.url.clone())
    }
    fn title(&self) -> String {
        self.page(|page| page.title.clone())
    }
    fn render_surface(&self) -> Raster {
        let (width, height) = self.log.lock().surface.unwrap_or((800, 600));
        Raster::blank(width, height)
    }
}

impl Drop for FakeView {
    fn drop(&mut self) {
        self.log.lock().released.push(self.tab);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintCall {
    Dialog,
    Begin,
    Draw { target: PageRect, source: (u32, u32) },
    End,
}

#[derive(Default)]
struct PrinterLog {
    accept: bool,
    page: Option<PageRect>,
    fail_begin: Option<String>,
    calls: Vec<PrintCall>,
}

#[derive(Clone, Default)]
pub struct FakePrinter {
    log: Arc<Mutex<PrinterLog>>,
}

impl FakePrinter {
    pub fn accepting(page: PageRect) -> Self {
        let printer = Self::default();
        {
            let mut log = printer.log.lock();
            log.accept = true;
            log.page = Some(page);
        }
        printer
    }

    pub fn cancelling() -> Self {
        Self::default()
    }

    pub fn fail_begin(&self, reason: &str) {
        self.log.lock().fail_begin = Some(reason.to_string());
    }

    pub fn calls(&self) -> Vec<PrintCall> {
        self.log.lock().calls.clone()
    }
}

impl PrintService for FakePrinter {
    fn open_dialog(&mut self, _config: &PrinterConfig) -> DialogOutcome {
        let mut log = self.log.lock();
        log.calls.push(PrintCall::Dialog);
        if log.accept {
            DialogOutcome::Accepted
        } else {
            DialogOutcome::Cancelled
        }
    }

    fn begin_job(&mut self) -> Result<PageRect, PrintError> {
        let mut log = self.log.lock();
        if let Some(reason) = log.fail_begin.clone() {
            return Err(PrintError::Device(reason));
        }
        log.calls.push(PrintCall::Begin);
        Ok(log.page.unwrap_or(PageRect::new(0, 0, 600, 800)))
    }

    fn draw(&mut self, raster: &Raster, target: PageRect) -> Result<(), PrintError> {
        self.log.lock().calls.push(PrintCall::Draw {
            target,
            source: (raster.width(), raster.height()),
        });
        Ok(())
    }

    fn end_job(&mut self) -> Result<(), PrintError> {
        self.log.lock().calls.push(PrintCall::End);
        Ok(())
    }
}

pub struct Harness {
    pub browser: Browser,
    pub engines: FakeEngines,
    pub toolkit: HeadlessToolkit,
    pub printer: FakePrinter,
}

impl Harness {
    pub fn tab_id(&self, window: WindowId, index: usize) -> TabId {
        self.browser
            .windows()
            .get(window)
            .unwrap()
            .tab(index)
            .unwrap()
            .id()
    }
}

/// Browser wired to fakes, with a printer that accepts a 600 x 800 page
pub fn harness() -> Harness {
    let engines = FakeEngines::default();
    let toolkit = HeadlessToolkit::new();
    let printer = FakePrinter::accepting(PageRect::new(0, 0, 600, 800));

    let browser = Browser::new(
        Config::default(),
        Box::new(engines.clone()),
        Box::new(toolkit.clone()),
        Box::new(printer.clone()),
    )
    .unwrap();

    Harness {
        browser,
        engines,
        toolkit,
        printer,
    }
}
