// src/domain/guest.rs
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Identity documents the front desk accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Passport,
    IdCard,
    DrivingLicense,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Passport,
        DocumentType::IdCard,
        DocumentType::DrivingLicense,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Passport => "passport",
            DocumentType::IdCard => "id_card",
            DocumentType::DrivingLicense => "driving_license",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Passport => "Passport",
            DocumentType::IdCard => "ID card",
            DocumentType::DrivingLicense => "Driving licence",
        }
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown document type '{s}'"))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guest as stored for a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub property_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub document_type: Option<DocumentType>,
    pub document_id: Option<String>,
    pub notes: Option<String>,
    /// Unix seconds.
    pub created_at: i64,
}

impl Guest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Guest-intake form exactly as submitted. Nothing here is trusted yet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct GuestForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub document_type: Option<String>,
    pub document_id: Option<String>,
    pub notes: Option<String>,
}

/// Form field names, in the order errors are reported.
pub const GUEST_FIELDS: [&str; 8] = [
    "firstName",
    "lastName",
    "email",
    "phone",
    "nationality",
    "documentType",
    "documentId",
    "notes",
];

impl GuestForm {
    /// Builds a form from decoded `application/x-www-form-urlencoded` pairs.
    /// Unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut form = GuestForm::default();
        for (key, value) in pairs {
            let value = value.into_owned();
            match key.as_ref() {
                "firstName" => form.first_name = value,
                "lastName" => form.last_name = value,
                "email" => form.email = Some(value),
                "phone" => form.phone = Some(value),
                "nationality" => form.nationality = Some(value),
                "documentType" => form.document_type = Some(value),
                "documentId" => form.document_id = Some(value),
                "notes" => form.notes = Some(value),
                _ => {}
            }
        }
        form
    }

    /// Optional fields submitted empty count as absent.
    pub fn normalized(self) -> Self {
        fn present(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.is_empty())
        }

        GuestForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: present(self.email),
            phone: present(self.phone),
            nationality: present(self.nationality),
            document_type: present(self.document_type),
            document_id: present(self.document_id),
            notes: present(self.notes),
        }
    }
}

impl From<&Guest> for GuestForm {
    fn from(g: &Guest) -> Self {
        GuestForm {
            first_name: g.first_name.clone(),
            last_name: g.last_name.clone(),
            email: g.email.clone(),
            phone: g.phone.clone(),
            nationality: g.nationality.clone(),
            document_type: g.document_type.map(|t| t.as_str().to_string()),
            document_id: g.document_id.clone(),
            notes: g.notes.clone(),
        }
    }
}

/// A guest record that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGuest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub document_type: Option<DocumentType>,
    pub document_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name, e.g. "firstName".
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Messages for one field, for rendering next to its input.
pub fn messages_for<'a>(errors: &'a [FieldError], field: &'a str) -> impl Iterator<Item = &'a str> {
    errors
        .iter()
        .filter(move |e| e.field == field)
        .map(|e| e.message.as_str())
}

/// The gate every guest record passes before it reaches the database.
pub fn validate_guest(form: GuestForm) -> Result<NewGuest, Vec<FieldError>> {
    let form = form.normalized();
    let mut errors = Vec::new();

    if let Err(report) = form.validate() {
        for (field, field_errors) in report.field_errors() {
            for err in field_errors.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                errors.push(FieldError::new(camel_case(&field), message));
            }
        }
    }

    let document_type = match form.document_type.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<DocumentType>() {
            Ok(t) => Some(t),
            Err(_) => {
                errors.push(FieldError::new(
                    "documentType",
                    "Document type must be one of passport, id_card, driving_license",
                ));
                None
            }
        },
    };

    if !errors.is_empty() {
        errors.sort_by_key(|e| {
            GUEST_FIELDS
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(GUEST_FIELDS.len())
        });
        return Err(errors);
    }

    Ok(NewGuest {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        phone: form.phone,
        nationality: form.nationality,
        document_type,
        document_id: form.document_id,
        notes: form.notes,
    })
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
