//! Customer form controller.
//!
//! Binds each [`Command`] to one request against the customer backend and
//! renders the outcome into the [`FormView`]. Each handler is a single
//! attempt: failures are shown in the flash message and the controller
//! stays usable.
//!
//! # Example
//!
//! ```no_run
//! use customer_client::{ClientConfig, Command, FormController};
//!
//! # async fn example() -> Result<(), customer_client::ClientError> {
//! let config = ClientConfig::from_env()?;
//! let http = config.build_http_client()?;
//! let mut controller = FormController::new(http, config);
//!
//! controller.form_mut().customer_id = "42".into();
//! controller.dispatch(Command::Retrieve).await;
//! println!("{}", controller.flash());
//! # Ok(())
//! # }
//! ```

use shared::Customer;

use crate::api::CustomerApi;
use crate::client::HttpClient;
use crate::command::{Command, CommandOutcome};
use crate::config::ClientConfig;
use crate::error::{ClientError, SERVER_ERROR_MESSAGE};
use crate::form::{FormState, FormView, RenderUpdate, SearchResults};

pub const SUCCESS_MESSAGE: &str = "Success";
pub const DELETED_MESSAGE: &str = "Customer has been Deleted!";
pub const DEACTIVATED_MESSAGE: &str = "Customer has been Deactivated!";
pub const ACTIVATED_MESSAGE: &str = "Customer has been Activated!";

/// Controller for the customer page
#[derive(Debug)]
pub struct FormController<H> {
    api: CustomerApi<H>,
    config: ClientConfig,
    view: FormView,
    /// Name filter of the last successful search, re-run after (de)activation
    last_search: Option<String>,
}

impl<H: HttpClient> FormController<H> {
    pub fn new(http: H, config: ClientConfig) -> Self {
        Self {
            api: CustomerApi::new(http),
            config,
            view: FormView::new(),
            last_search: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &CustomerApi<H> {
        &self.api
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn form(&self) -> &FormState {
        self.view.form()
    }

    /// User input into the form
    pub fn form_mut(&mut self) -> &mut FormState {
        self.view.form_mut()
    }

    pub fn flash(&self) -> &str {
        self.view.flash()
    }

    pub fn search_results(&self) -> Option<&SearchResults> {
        self.view.results()
    }

    /// Commands offered by this controller
    pub fn available_commands(&self) -> Vec<Command> {
        Command::available(self.config.supports_activation)
    }

    /// Route a command to its handler
    pub async fn dispatch(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Create => self.create().await,
            Command::Update => self.update().await,
            Command::Retrieve => self.retrieve().await,
            Command::Delete => self.delete().await,
            Command::Activate => self.activate().await,
            Command::Deactivate => self.deactivate().await,
            Command::Search => self.search().await,
            Command::Clear => self.clear(),
        }
    }

    /// Handle a click on the button with the given DOM id
    pub async fn click(&mut self, button_id: &str) -> Option<CommandOutcome> {
        let command = Command::from_button_id(button_id)?;
        Some(self.dispatch(command).await)
    }

    pub async fn create(&mut self) -> CommandOutcome {
        let payload = self.form().payload();
        tracing::info!(name = %payload.name, "Create customer");

        match self.api.create(&payload).await {
            Ok(customer) => self.show_customer(customer, SUCCESS_MESSAGE),
            Err(e) => self.show_error(Command::Create, &e, RenderUpdate::Keep),
        }
    }

    pub async fn update(&mut self) -> CommandOutcome {
        let id = self.form().customer_id();
        let payload = self.form().payload();
        tracing::info!(customer_id = %id, "Update customer");

        match self.api.update(&id, &payload).await {
            Ok(customer) => self.show_customer(customer, SUCCESS_MESSAGE),
            Err(e) => self.show_error(Command::Update, &e, RenderUpdate::Keep),
        }
    }

    pub async fn retrieve(&mut self) -> CommandOutcome {
        let id = self.form().customer_id();
        tracing::info!(customer_id = %id, "Retrieve customer");

        match self.api.get(&id).await {
            Ok(customer) => self.show_customer(customer, SUCCESS_MESSAGE),
            Err(e) => self.show_error(Command::Retrieve, &e, RenderUpdate::ClearFields),
        }
    }

    /// Hard delete, or soft delete (deactivate) when activation is supported.
    ///
    /// Any failure shows [`SERVER_ERROR_MESSAGE`], whatever the backend said.
    pub async fn delete(&mut self) -> CommandOutcome {
        let id = self.form().customer_id();
        let soft = self.config.supports_activation;
        tracing::info!(customer_id = %id, soft, "Delete customer");

        let result = if soft {
            self.api.soft_delete(&id).await
        } else {
            self.api.delete(&id).await
        };

        match result {
            Ok(()) => {
                let text = if soft { DEACTIVATED_MESSAGE } else { DELETED_MESSAGE };
                self.view.render(RenderUpdate::ClearFields, Some(text));
                CommandOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(customer_id = %id, error = %e, "Delete failed");
                self.view.render(RenderUpdate::Keep, Some(SERVER_ERROR_MESSAGE));
                CommandOutcome::Failed
            }
        }
    }

    pub async fn activate(&mut self) -> CommandOutcome {
        self.set_active(true).await
    }

    pub async fn deactivate(&mut self) -> CommandOutcome {
        self.set_active(false).await
    }

    /// Search by the name in the form; a blank name lists every customer
    pub async fn search(&mut self) -> CommandOutcome {
        let command = Command::Search;
        if !self.supports(command) {
            return CommandOutcome::Unsupported;
        }

        let name = self.form().name.clone();
        tracing::info!(name = %name, "Search customers");

        match self.api.search(&name).await {
            Ok(rows) => {
                tracing::debug!(matches = rows.len(), "Search finished");
                self.last_search = Some(name);
                self.view.render(
                    RenderUpdate::Results {
                        rows,
                        highlight: None,
                        copy_first: true,
                    },
                    Some(SUCCESS_MESSAGE),
                );
                CommandOutcome::Succeeded
            }
            Err(e) => self.show_error(command, &e, RenderUpdate::Keep),
        }
    }

    /// Blank the id and all customer fields. No request is made.
    pub fn clear(&mut self) -> CommandOutcome {
        self.view.render(RenderUpdate::Reset, None);
        CommandOutcome::Succeeded
    }

    async fn set_active(&mut self, active: bool) -> CommandOutcome {
        let command = if active {
            Command::Activate
        } else {
            Command::Deactivate
        };
        if !self.supports(command) {
            return CommandOutcome::Unsupported;
        }

        let id = self.form().customer_id();
        tracing::info!(customer_id = %id, active, "Set customer activation");

        let result = if active {
            self.api.activate(&id).await
        } else {
            self.api.deactivate(&id).await
        };

        match result {
            Ok(customer) => {
                let text = if active {
                    ACTIVATED_MESSAGE
                } else {
                    DEACTIVATED_MESSAGE
                };
                let highlight = customer.customer_id.clone();
                self.show_customer(customer, text);
                self.refresh_results(highlight).await;
                CommandOutcome::Succeeded
            }
            Err(e) => self.show_error(command, &e, RenderUpdate::Keep),
        }
    }

    /// Re-run the last search so the table reflects the new status
    async fn refresh_results(&mut self, highlight: shared::CustomerId) {
        let Some(name) = self.last_search.clone() else {
            return;
        };

        match self.api.search(&name).await {
            Ok(rows) => self.view.render(
                RenderUpdate::Results {
                    rows,
                    highlight: Some(highlight),
                    copy_first: false,
                },
                None,
            ),
            Err(e) => tracing::warn!(error = %e, "Refreshing search results failed"),
        }
    }

    fn supports(&self, command: Command) -> bool {
        if command.requires_activation() && !self.config.supports_activation {
            tracing::warn!(%command, "Command requires activation support");
            return false;
        }
        true
    }

    fn show_customer(&mut self, customer: Customer, text: &str) -> CommandOutcome {
        self.view.render(RenderUpdate::Populate(customer), Some(text));
        CommandOutcome::Succeeded
    }

    fn show_error(
        &mut self,
        command: Command,
        err: &ClientError,
        update: RenderUpdate,
    ) -> CommandOutcome {
        tracing::warn!(%command, error = %err, "Backend request failed");
        self.view.render(update, Some(err.display_message()));
        CommandOutcome::Failed
    }
}
