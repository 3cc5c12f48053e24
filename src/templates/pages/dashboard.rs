use crate::domain::booking::Booking;
use crate::domain::dates::format_date;
use crate::domain::property::Property;
use crate::domain::stats::DashboardStats;
use crate::templates::components::property_nav;
use crate::templates::{card, desktop_layout, stat_card};
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct DashboardVm {
    pub email: String,
    pub properties: Vec<Property>,
}

/// Landing page after sign-in: the user's properties.
pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        Some(&vm.email),
        html! {
            main class="container" {
                h1 { "Dashboard" }
                p { "Signed in as " strong { (vm.email) } }

                @if vm.properties.is_empty() {
                    (card("No property yet", html! {
                        p { "Add your hostel to start recording guests and bookings." }
                        a href="/properties" class="button primary" { "Add a property" }
                    }))
                } @else {
                    section class="card" {
                        h3 { "Your properties" }
                        ul {
                            @for p in &vm.properties {
                                li {
                                    a href=(format!("/properties/{}/dashboard", p.id)) { (p.name) }
                                    @if let Some(city) = &p.city { span class="muted" { " · " (city) } }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub struct PropertyDashboardVm {
    pub email: String,
    pub property: Property,
    pub today: NaiveDate,
    pub stats: DashboardStats,
    pub arrivals: Vec<Booking>,
    pub departures: Vec<Booking>,
}

pub fn property_dashboard_page(vm: &PropertyDashboardVm) -> Markup {
    let s = &vm.stats;
    desktop_layout(
        &vm.property.name,
        Some(&vm.email),
        html! {
            main class="container" {
                (property_nav(&vm.property, "dashboard"))
                p class="muted" { "Today is " (format_date(&vm.today)) }

                div class="stat-grid" {
                    (stat_card(
                        "Occupancy",
                        &format!("{:.0}%", s.current_occupancy_percentage),
                        &format!("{} of {} beds", s.occupied_beds, s.total_beds),
                    ))
                    (stat_card("Available beds", &s.available_beds.to_string(), &format!("across {} rooms", s.total_rooms)))
                    (stat_card("Arrivals", &s.arrivals_today.to_string(), "today"))
                    (stat_card("Departures", &s.departures_today.to_string(), "today"))
                }

                (card("Arriving today", activity_table(&vm.arrivals, |b| b.check_out, "Leaves")))
                (card("Leaving today", activity_table(&vm.departures, |b| b.check_in, "Arrived")))
            }
        },
    )
}

fn activity_table(bookings: &[Booking], other_day: fn(&Booking) -> NaiveDate, other_label: &str) -> Markup {
    html! {
        @if bookings.is_empty() {
            p class="muted" { "Nothing scheduled." }
        } @else {
            table class="table" {
                thead { tr { th { "Guest" } th { "Room" } th { "Beds" } th { (other_label) } } }
                tbody {
                    @for b in bookings {
                        tr {
                            td { a href=(format!("/properties/{}/guests/{}", b.property_id, b.guest_id)) { (b.guest_name) } }
                            td { (b.room_name) }
                            td { (b.beds) }
                            td { (format_date(&other_day(b))) }
                        }
                    }
                }
            }
        }
    }
}
