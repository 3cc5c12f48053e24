// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(signed_in_as: Option<&str>) -> Markup {
    desktop_layout(
        "Home",
        signed_in_as,
        html! {
            main class="container" {
                h1 { "HostelPulse" }
                p class="lead" { "Guests, rooms and today's occupancy for your hostel, in one place." }

                @if signed_in_as.is_some() {
                    a href="/dashboard" class="button primary" { "Open dashboard" }
                } @else {
                    a href="/login" class="button primary" { "Sign in" }
                }

                (card("What you get", html! {
                    ul {
                        li { "Guest records with document details" }
                        li { "Arrivals, departures and bed occupancy for today" }
                        li { "Spreadsheet export of your guest list" }
                    }
                }))
            }
        },
    )
}
