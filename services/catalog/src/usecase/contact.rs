use chrono::Utc;

use crate::domain::repository::ContactRepository;
use crate::domain::types::Contact;
use crate::error::CatalogServiceError;

// ── CreateContact ────────────────────────────────────────────────────────────

pub struct CreateContactInput {
    pub sno: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub message: String,
}

pub struct CreateContactUseCase<C: ContactRepository> {
    pub contacts: C,
}

impl<C: ContactRepository> CreateContactUseCase<C> {
    pub async fn execute(&self, input: CreateContactInput) -> Result<(), CatalogServiceError> {
        let contact = Contact {
            sno: input.sno,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            mobile_number: input.mobile_number,
            message: input.message,
            created_at: Utc::now(),
        };
        self.contacts.create(&contact).await
    }
}

// ── ListContacts ─────────────────────────────────────────────────────────────

pub struct ListContactsUseCase<C: ContactRepository> {
    pub contacts: C,
}

impl<C: ContactRepository> ListContactsUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Contact>, CatalogServiceError> {
        self.contacts.list().await
    }
}
