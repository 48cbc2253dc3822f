//! Window controller
//!
//! Routes each `Command` from a window's menus, toolbar, tab bar and address
//! bar to the tab it concerns.

use skiff_navigation::NavigationCommand;
use skiff_session::WindowId;

use crate::browser::Browser;
use crate::command::{Command, Outcome};
use crate::print::{print_surface, PrintOutcome};
use crate::Result;

impl Browser {
    /// Handle one command issued from `window`
    pub fn dispatch(&mut self, window: WindowId, command: Command) -> Result<Outcome> {
        self.ensure_running()?;
        tracing::debug!(window_id = %window, ?command, "Dispatching command");

        match command {
            Command::NewWindow => Ok(Outcome::WindowOpened(self.open_window()?)),
            Command::NewTab => Ok(Outcome::TabOpened(self.open_tab(window)?)),
            Command::CloseTab(index) => Ok(Outcome::TabClosed(self.close_tab(window, index)?)),
            Command::SelectTab(index) => {
                self.select_tab(window, index)?;
                Ok(Outcome::Done)
            }
            Command::Back => self.navigate_active(window, NavigationCommand::Back),
            Command::Forward => self.navigate_active(window, NavigationCommand::Forward),
            Command::Reload => self.navigate_active(window, NavigationCommand::Reload),
            Command::Stop => self.navigate_active(window, NavigationCommand::Stop),
            Command::Home => {
                let home = NavigationCommand::Load(self.config.home_url.clone());
                self.navigate_active(window, home)
            }
            Command::EditAddress(text) => {
                let target = self.windows.get_mut(window)?;
                let index = target.active_tab()?;
                target.set_address_text(index, text)?;
                Ok(Outcome::Done)
            }
            Command::SubmitAddress => self.submit_address(window),
            Command::Print => Ok(Outcome::Printed(self.print(window)?)),
            Command::CloseWindow => {
                self.close_window(window)?;
                Ok(Outcome::Done)
            }
            Command::Quit => {
                self.quit();
                Ok(Outcome::Quit)
            }
        }
    }

    /// Resolve the active tab's address text and navigate there. Text that
    /// is not a usable URL clears the field and navigates nowhere.
    pub fn submit_address(&mut self, window: WindowId) -> Result<Outcome> {
        let target = self.windows.get_mut(window)?;
        let index = target.active_tab()?;
        let text = target.tab(index)?.address_text().to_string();

        match self.resolver.resolve(&text) {
            Ok(url) => {
                NavigationCommand::Load(url.clone()).apply(target.engine_mut(index)?);
                tracing::info!(window_id = %window, index, url = %url, "Navigating");
                Ok(Outcome::Navigated(url))
            }
            Err(e) => {
                tracing::debug!(window_id = %window, index, error = %e, "Address rejected");
                target.clear_address_text(index)?;
                Ok(Outcome::AddressCleared)
            }
        }
    }

    /// Print the active tab's page
    pub fn print(&mut self, window: WindowId) -> Result<PrintOutcome> {
        let target = self.windows.get(window)?;
        let index = target.active_tab()?;
        let view = target.engine(index)?;

        Ok(print_surface(
            self.printer.as_mut(),
            &self.config.printer,
            view,
        )?)
    }

    fn navigate_active(&mut self, window: WindowId, command: NavigationCommand) -> Result<Outcome> {
        let engine = self.windows.get_mut(window)?.active_engine_mut()?;
        command.apply(engine);
        Ok(Outcome::Done)
    }
}
