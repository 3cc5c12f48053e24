use crate::templates::{desktop_layout, email_cta_form};
use maud::{html, Markup};

pub fn login_page() -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" {
                    "Enter your email and we’ll send you a secure sign-in link."
                }

                (email_cta_form())
            }
        },
    )
}

/// Success message that replaces the login form (HTMX partial).
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="text-center py-8 px-4 fade-in" {
            h3 class="text-lg leading-6 font-medium" { "Check your email" }
            p class="text-sm muted" {
                "We sent a sign-in link to "
                strong { (email) }
                "."
            }
            p class="text-sm muted" { "The link works once and expires in 15 minutes." }
            a href="/login" class="text-sm font-medium" { "Try with a different email" }
        }
    }
}

/// Full-page version for browsers without HTMX.
pub fn check_email_page(email: &str) -> Markup {
    desktop_layout(
        "Check your email",
        None,
        html! {
            main class="container narrow" {
                (check_email_content(email))
            }
        },
    )
}
