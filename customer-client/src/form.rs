//! Form view-model
//!
//! [`FormView`] holds everything the customer page displays: the form
//! fields, the flash message and the search results table.
//! [`FormView::render`] is the only way the controller changes it.

use shared::{Customer, CustomerId, CustomerPayload};

/// DOM identifiers of the displayed regions
pub mod field_ids {
    pub const CUSTOMER_ID: &str = "customer_id";
    pub const CUSTOMER_NAME: &str = "customer_name";
    pub const CUSTOMER_ADDRESS: &str = "customer_address";
    pub const CUSTOMER_PHONE_NUMBER: &str = "customer_phone_number";
    pub const CUSTOMER_EMAIL: &str = "customer_email";
    pub const CUSTOMER_CREDIT_CARD: &str = "customer_credit_card";
    pub const CUSTOMER_ACTIVE: &str = "customer_active";
    pub const FLASH_MESSAGE: &str = "flash_message";
    pub const SEARCH_RESULTS: &str = "search_results";

    /// Input fields, in form order
    pub const FORM_FIELDS: [&str; 7] = [
        CUSTOMER_ID,
        CUSTOMER_NAME,
        CUSTOMER_ADDRESS,
        CUSTOMER_PHONE_NUMBER,
        CUSTOMER_EMAIL,
        CUSTOMER_CREDIT_CARD,
        CUSTOMER_ACTIVE,
    ];
}

/// Selector text for an active flag
pub fn encode_active(active: bool) -> &'static str {
    if active { "true" } else { "false" }
}

/// Selector text to wire flag. Only the exact string `"true"` is active.
pub fn decode_active(value: &str) -> bool {
    value == "true"
}

/// Raw values of the form inputs, exactly as displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub customer_id: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub credit_card: String,
    pub active: String,
}

impl FormState {
    pub fn customer_id(&self) -> CustomerId {
        CustomerId::new(self.customer_id.clone())
    }

    /// Request body built from the current inputs
    pub fn payload(&self) -> CustomerPayload {
        CustomerPayload {
            name: self.name.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            credit_card: self.credit_card.clone(),
            active: decode_active(&self.active),
        }
    }

    /// Read an input by its DOM id
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.slot(field_id).map(String::as_str)
    }

    /// Write an input by its DOM id; returns false for unknown ids
    pub fn set(&mut self, field_id: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(field_id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// All customer fields empty (the id is not considered)
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.address.is_empty()
            && self.phone_number.is_empty()
            && self.email.is_empty()
            && self.credit_card.is_empty()
            && self.active.is_empty()
    }

    fn slot(&self, field_id: &str) -> Option<&String> {
        use field_ids::*;
        match field_id {
            CUSTOMER_ID => Some(&self.customer_id),
            CUSTOMER_NAME => Some(&self.name),
            CUSTOMER_ADDRESS => Some(&self.address),
            CUSTOMER_PHONE_NUMBER => Some(&self.phone_number),
            CUSTOMER_EMAIL => Some(&self.email),
            CUSTOMER_CREDIT_CARD => Some(&self.credit_card),
            CUSTOMER_ACTIVE => Some(&self.active),
            _ => None,
        }
    }

    fn slot_mut(&mut self, field_id: &str) -> Option<&mut String> {
        use field_ids::*;
        match field_id {
            CUSTOMER_ID => Some(&mut self.customer_id),
            CUSTOMER_NAME => Some(&mut self.name),
            CUSTOMER_ADDRESS => Some(&mut self.address),
            CUSTOMER_PHONE_NUMBER => Some(&mut self.phone_number),
            CUSTOMER_EMAIL => Some(&mut self.email),
            CUSTOMER_CREDIT_CARD => Some(&mut self.credit_card),
            CUSTOMER_ACTIVE => Some(&mut self.active),
            _ => None,
        }
    }

    fn populate(&mut self, customer: &Customer) {
        self.customer_id = customer.customer_id.to_string();
        self.name = customer.name.clone();
        self.address = customer.address.clone();
        self.phone_number = customer.phone_number.clone();
        self.email = customer.email.clone();
        self.credit_card = customer.credit_card.clone();
        self.active = encode_active(customer.active).to_string();
    }

    // The id input is left as typed
    fn clear_customer_fields(&mut self) {
        self.name.clear();
        self.address.clear();
        self.phone_number.clear();
        self.email.clear();
        self.credit_card.clear();
        self.active.clear();
    }
}

/// Column headers of the results table
pub const RESULT_COLUMNS: [&str; 6] = [
    "ID",
    "Name",
    "Address",
    "Phone Number",
    "Email",
    "Credit Card",
];

/// Results table of the last search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    rows: Vec<Customer>,
    highlighted: Option<CustomerId>,
}

impl SearchResults {
    pub fn rows(&self) -> &[Customer] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn highlighted(&self) -> Option<&CustomerId> {
        self.highlighted.as_ref()
    }

    pub fn is_highlighted(&self, customer: &Customer) -> bool {
        self.highlighted.as_ref() == Some(&customer.customer_id)
    }

    /// Displayed cells, one row per match, in [`RESULT_COLUMNS`] order
    pub fn table(&self) -> Vec<[String; 6]> {
        self.rows
            .iter()
            .map(|c| {
                [
                    c.customer_id.to_string(),
                    c.name.clone(),
                    c.address.clone(),
                    c.phone_number.clone(),
                    c.email.clone(),
                    c.credit_card.clone(),
                ]
            })
            .collect()
    }
}

/// Change applied to the displayed form by [`FormView::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderUpdate {
    /// Leave the form as it is
    Keep,
    /// Mirror a customer returned by the backend
    Populate(Customer),
    /// Blank the customer fields, keep the id input
    ClearFields,
    /// Blank the id and every customer field
    Reset,
    /// Replace the results table; copy the first row into the form
    Results {
        rows: Vec<Customer>,
        highlight: Option<CustomerId>,
        copy_first: bool,
    },
}

/// Everything the customer page shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    form: FormState,
    flash: String,
    results: Option<SearchResults>,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// User input into the form
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn flash(&self) -> &str {
        &self.flash
    }

    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    /// Apply an update and, when given, replace the flash message
    pub fn render(&mut self, update: RenderUpdate, flash: Option<&str>) {
        match update {
            RenderUpdate::Keep => {}
            RenderUpdate::Populate(customer) => self.form.populate(&customer),
            RenderUpdate::ClearFields => self.form.clear_customer_fields(),
            RenderUpdate::Reset => {
                self.form.customer_id.clear();
                self.form.clear_customer_fields();
            }
            RenderUpdate::Results {
                rows,
                highlight,
                copy_first,
            } => {
                if copy_first && let Some(first) = rows.first() {
                    self.form.populate(first);
                }
                self.results = Some(SearchResults {
                    rows,
                    highlighted: highlight,
                });
            }
        }

        if let Some(text) = flash {
            self.flash = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        Customer {
            customer_id: CustomerId::from(1),
            name: "Alice".into(),
            address: "X".into(),
            phone_number: "555".into(),
            email: "a@x.com".into(),
            credit_card: "4111".into(),
            active: true,
        }
    }

    #[test]
    fn test_active_conversion_is_strict() {
        assert!(decode_active("true"));
        assert!(!decode_active("True"));
        assert!(!decode_active("TRUE"));
        assert!(!decode_active(""));
        assert!(!decode_active("false"));
        assert_eq!(encode_active(true), "true");
        assert_eq!(encode_active(false), "false");
    }

    #[test]
    fn test_payload_from_inputs() {
        let mut form = FormState::default();
        form.set(field_ids::CUSTOMER_NAME, "Bob");
        form.set(field_ids::CUSTOMER_ACTIVE, "true");
        let payload = form.payload();
        assert_eq!(payload.name, "Bob");
        assert!(payload.active);
        assert_eq!(payload.email, "");
    }

    #[test]
    fn test_field_access_by_dom_id() {
        let mut form = FormState::default();
        for id in field_ids::FORM_FIELDS {
            assert!(form.set(id, id));
            assert_eq!(form.get(id), Some(id));
        }
        assert!(!form.set(field_ids::FLASH_MESSAGE, "nope"));
        assert_eq!(form.get("customer_age"), None);
    }

    #[test]
    fn test_render_populate_then_clear_fields() {
        let mut view = FormView::new();
        view.render(RenderUpdate::Populate(alice()), Some("Success"));
        assert_eq!(view.form().customer_id, "1");
        assert_eq!(view.form().active, "true");
        assert_eq!(view.flash(), "Success");

        view.render(RenderUpdate::ClearFields, Some("gone"));
        assert!(view.form().is_blank());
        assert_eq!(view.form().customer_id, "1");
        assert_eq!(view.flash(), "gone");
    }

    #[test]
    fn test_render_reset_blanks_id() {
        let mut view = FormView::new();
        view.render(RenderUpdate::Populate(alice()), Some("Success"));
        view.render(RenderUpdate::Reset, None);
        assert_eq!(view.form(), &FormState::default());
        // flash untouched without new text
        assert_eq!(view.flash(), "Success");
    }

    #[test]
    fn test_render_results_table() {
        let mut view = FormView::new();
        view.render(
            RenderUpdate::Results {
                rows: vec![alice()],
                highlight: None,
                copy_first: true,
            },
            Some("Success"),
        );
        let results = view.results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(
            results.table(),
            vec![[
                "1".to_string(),
                "Alice".to_string(),
                "X".to_string(),
                "555".to_string(),
                "a@x.com".to_string(),
                "4111".to_string(),
            ]]
        );
        assert_eq!(view.form().name, "Alice");
    }

    #[test]
    fn test_render_empty_results_keeps_form() {
        let mut view = FormView::new();
        view.form_mut().name = "Nobody".into();
        view.render(
            RenderUpdate::Results {
                rows: vec![],
                highlight: None,
                copy_first: true,
            },
            Some("Success"),
        );
        assert!(view.results().unwrap().is_empty());
        assert_eq!(view.form().name, "Nobody");
    }

    #[test]
    fn test_highlight() {
        let mut view = FormView::new();
        view.render(
            RenderUpdate::Results {
                rows: vec![alice()],
                highlight: Some(CustomerId::from(1)),
                copy_first: false,
            },
            None,
        );
        let results = view.results().unwrap();
        assert!(results.is_highlighted(&alice()));
        assert!(view.form().is_blank());
    }
}
