use crate::domain::booking::Booking;
use crate::domain::dates::format_date;
use crate::domain::guest::{DocumentType, FieldError, Guest, GuestForm};
use crate::domain::property::Property;
use crate::templates::components::{field_errors, property_nav, text_input};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn guest_list_page(
    email: &str,
    property: &Property,
    guests: &[Guest],
    query: Option<&str>,
) -> Markup {
    let base = format!("/properties/{}/guests", property.id);
    desktop_layout(
        &format!("Guests · {}", property.name),
        Some(email),
        html! {
            main class="container" {
                (property_nav(property, "guests"))

                div class="toolbar" {
                    form action=(base) method="get" class="search" {
                        input type="search" name="q" placeholder="Search by name or email" value=[query];
                        button type="submit" { "Search" }
                    }
                    a href=(format!("{base}/new")) class="button primary" { "New guest" }
                    a href=(format!("{base}/export")) class="button" { "Export .xlsx" }
                }

                @if guests.is_empty() {
                    p class="muted" {
                        @if query.is_some() { "No guests match that search." } @else { "No guests yet." }
                    }
                } @else {
                    table class="table" {
                        thead {
                            tr { th { "Name" } th { "Email" } th { "Nationality" } th { "Added" } }
                        }
                        tbody {
                            @for g in guests {
                                tr {
                                    td { a href=(format!("{base}/{}", g.id)) { (g.last_name) ", " (g.first_name) } }
                                    td { (g.email.as_deref().unwrap_or("—")) }
                                    td { (g.nationality.as_deref().unwrap_or("—")) }
                                    td { (format_date(&g.created_at.saturating_mul(1000))) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Where the form posts and what the page is about.
pub enum GuestFormMode<'a> {
    Create,
    Edit {
        guest: &'a Guest,
        bookings: &'a [Booking],
    },
}

pub fn guest_form_page(
    email: &str,
    property: &Property,
    mode: GuestFormMode<'_>,
    form: &GuestForm,
    errors: &[FieldError],
) -> Markup {
    let base = format!("/properties/{}/guests", property.id);
    let (title, action, editing, stays) = match mode {
        GuestFormMode::Create => ("New guest".to_string(), base.clone(), None, None),
        GuestFormMode::Edit { guest, bookings } => (
            guest.full_name(),
            format!("{base}/{}", guest.id),
            Some(guest),
            Some(bookings),
        ),
    };
    let submit_label = if editing.is_some() { "Save changes" } else { "Create guest" };

    desktop_layout(
        &title,
        Some(email),
        html! {
            main class="container" {
                (property_nav(property, "guests"))
                h1 { (title) }
                @if let Some(guest) = editing {
                    p class="muted" { "Guest since " (format_date(&guest.created_at.saturating_mul(1000))) }
                }

                @if !errors.is_empty() {
                    div class="alert alert-error" role="alert" { "Please fix the highlighted fields." }
                }

                form action=(action) method="post" class="guest-form" novalidate {
                    (text_input("First name", "firstName", Some(form.first_name.as_str()), true, errors))
                    (text_input("Last name", "lastName", Some(form.last_name.as_str()), true, errors))
                    div class="field" {
                        label for="email" { "Email" }
                        input type="email" id="email" name="email" value=[form.email.as_deref()];
                        (field_errors(errors, "email"))
                    }
                    (text_input("Phone", "phone", form.phone.as_deref(), false, errors))
                    (text_input("Nationality", "nationality", form.nationality.as_deref(), false, errors))
                    div class="field" {
                        label for="documentType" { "Document type" }
                        select id="documentType" name="documentType" {
                            option value="" selected[form.document_type.is_none()] { "—" }
                            @for t in DocumentType::ALL {
                                option value=(t.as_str()) selected[form.document_type.as_deref() == Some(t.as_str())] { (t.label()) }
                            }
                        }
                        (field_errors(errors, "documentType"))
                    }
                    (text_input("Document number", "documentId", form.document_id.as_deref(), false, errors))
                    div class="field" {
                        label for="notes" { "Notes" }
                        textarea id="notes" name="notes" rows="3" { (form.notes.as_deref().unwrap_or("")) }
                    }
                    button type="submit" class="primary" { (submit_label) }
                    " "
                    a href=(base) { "Cancel" }
                }

                @if let Some(bookings) = stays {
                    (card("Stays", stay_history(bookings)))
                }
            }
        },
    )
}

fn stay_history(bookings: &[Booking]) -> Markup {
    html! {
        @if bookings.is_empty() {
            p class="muted" { "No bookings yet." }
        } @else {
            ul {
                @for b in bookings {
                    li {
                        (format_date(&b.check_in)) " → " (format_date(&b.check_out))
                        " · " (b.room_name) " · " (b.status)
                    }
                }
            }
        }
    }
}
