//! Customer read model for the query side.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::CustomerId;

/// An immutable snapshot of a customer's current state, denormalized for
/// query consumers.
///
/// The read path that maintains these snapshots replaces them wholesale: an
/// updated customer is a newly built instance, never an in-place mutation.
/// Equality is structural, so two snapshots built from the same fields
/// compare equal.
///
/// `customer_type` and `status` are free-form labels; their valid value sets
/// belong to the write side and are not encoded here. Field names follow the
/// upstream customer shape (`Id`, `CustomerType`, `ZipCode`, ...) when
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerReadModel {
    /// Unique identifier for the customer.
    pub id: CustomerId,

    /// Discriminates individual vs. company customers.
    pub customer_type: String,

    /// Customer name.
    pub name: String,

    /// Tax or identity document number.
    pub document: String,

    /// Contact email address.
    pub email: String,

    /// Birth date, for individual customers.
    pub birth_date: Option<NaiveDate>,

    /// Legal company name, for company customers.
    pub company_name: Option<String>,

    /// State registration number, for company customers.
    pub state_registration: Option<String>,

    // Postal address components.
    pub zip_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    /// Lifecycle state label (e.g., active/inactive).
    pub status: String,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,

    /// When the customer was last updated, absent if never updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl CustomerReadModel {
    /// Creates a new customer read model builder.
    pub fn builder() -> CustomerReadModelBuilder {
        CustomerReadModelBuilder::default()
    }
}

/// Builder for constructing customer read models.
#[derive(Debug, Default)]
pub struct CustomerReadModelBuilder {
    id: Option<CustomerId>,
    customer_type: Option<String>,
    name: Option<String>,
    document: Option<String>,
    email: Option<String>,
    birth_date: Option<NaiveDate>,
    company_name: Option<String>,
    state_registration: Option<String>,
    zip_code: Option<String>,
    street: Option<String>,
    number: Option<String>,
    complement: Option<String>,
    neighborhood: Option<String>,
    city: Option<String>,
    state: Option<String>,
    status: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl CustomerReadModelBuilder {
    /// Sets the customer ID.
    pub fn id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the customer type label.
    pub fn customer_type(mut self, customer_type: impl Into<String>) -> Self {
        self.customer_type = Some(customer_type.into());
        self
    }

    /// Sets the customer name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the document number.
    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the birth date.
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Sets the company name.
    pub fn company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Sets the state registration number.
    pub fn state_registration(mut self, state_registration: impl Into<String>) -> Self {
        self.state_registration = Some(state_registration.into());
        self
    }

    /// Sets the ZIP code.
    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Sets the street.
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Sets the street number.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Sets the address complement.
    pub fn complement(mut self, complement: impl Into<String>) -> Self {
        self.complement = Some(complement.into());
        self
    }

    /// Sets the neighborhood.
    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the status label.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the last-update timestamp.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the customer read model.
    ///
    /// # Panics
    ///
    /// Panics if required fields (id, customer_type, name, document, email,
    /// status, created_at) are not set.
    pub fn build(self) -> CustomerReadModel {
        CustomerReadModel {
            id: self.id.expect("id is required"),
            customer_type: self.customer_type.expect("customer_type is required"),
            name: self.name.expect("name is required"),
            document: self.document.expect("document is required"),
            email: self.email.expect("email is required"),
            birth_date: self.birth_date,
            company_name: self.company_name,
            state_registration: self.state_registration,
            zip_code: self.zip_code,
            street: self.street,
            number: self.number,
            complement: self.complement,
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state,
            status: self.status.expect("status is required"),
            created_at: self.created_at.expect("created_at is required"),
            updated_at: self.updated_at,
        }
    }

    /// Tries to build the customer read model, returning None if required
    /// fields are missing.
    pub fn try_build(self) -> Option<CustomerReadModel> {
        Some(CustomerReadModel {
            id: self.id?,
            customer_type: self.customer_type?,
            name: self.name?,
            document: self.document?,
            email: self.email?,
            birth_date: self.birth_date,
            company_name: self.company_name,
            state_registration: self.state_registration,
            zip_code: self.zip_code,
            street: self.street,
            number: self.number,
            complement: self.complement,
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state,
            status: self.status?,
            created_at: self.created_at?,
            updated_at: self.updated_at,
        })
    }
}
