use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::domain::types::Contact;
use crate::error::CatalogServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::contact::{CreateContactInput, CreateContactUseCase, ListContactsUseCase};

// ── POST /contacts ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub sno: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub message: String,
}

pub async fn create_contact(
    State(state): State<AppState>,
    Json(body): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, CatalogServiceError> {
    let usecase = CreateContactUseCase {
        contacts: state.contact_repo(),
    };
    usecase
        .execute(CreateContactInput {
            sno: body.sno,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            mobile_number: body.mobile_number,
            message: body.message,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "contact created successfully",
        }),
    ))
}

// ── GET /contacts ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ContactResponse {
    pub sno: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub message: String,
    #[serde(serialize_with = "verdant_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            sno: contact.sno,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            mobile_number: contact.mobile_number,
            message: contact.message,
            created_at: contact.created_at,
        }
    }
}

pub async fn get_all_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, CatalogServiceError> {
    let usecase = ListContactsUseCase {
        contacts: state.contact_repo(),
    };
    let contacts = usecase.execute().await?;
    Ok(Json(contacts.into_iter().map(Into::into).collect()))
}
