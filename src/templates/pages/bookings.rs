use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::dates::format_date;
use crate::domain::guest::Guest;
use crate::domain::property::{Property, Room};
use crate::templates::components::{form_alert, property_nav};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct BookingsVm<'a> {
    pub email: &'a str,
    pub property: &'a Property,
    pub bookings: &'a [Booking],
    pub guests: &'a [Guest],
    pub rooms: &'a [Room],
    pub query: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub fn bookings_page(vm: &BookingsVm<'_>) -> Markup {
    let base = format!("/properties/{}/bookings", vm.property.id);
    let export = match vm.query {
        Some(q) => format!(
            "{base}/export?{}",
            url::form_urlencoded::Serializer::new(String::new()).append_pair("q", q).finish()
        ),
        None => format!("{base}/export"),
    };
    desktop_layout(
        &format!("Bookings · {}", vm.property.name),
        Some(vm.email),
        html! {
            main class="container" {
                (property_nav(vm.property, "bookings"))

                div class="toolbar" {
                    form action=(base) method="get" class="search" {
                        input type="search" name="q" placeholder="Search by guest or room" value=[vm.query];
                        button type="submit" { "Search" }
                    }
                    a href=(export) class="button" { "Export .xlsx" }
                }

                @if vm.bookings.is_empty() {
                    p class="muted" {
                        @if vm.query.is_some() { "No bookings match that search." } @else { "No bookings yet." }
                    }
                } @else {
                    table class="table" {
                        thead {
                            tr { th { "Guest" } th { "Room" } th { "Check-in" } th { "Check-out" } th { "Beds" } th { "Status" } }
                        }
                        tbody {
                            @for b in vm.bookings {
                                tr {
                                    td { (b.guest_name) }
                                    td { (b.room_name) }
                                    td { (format_date(&b.check_in)) }
                                    td { (format_date(&b.check_out)) }
                                    td { (b.beds) }
                                    td {
                                        form action=(format!("{base}/{}/status", b.id)) method="post" class="inline" {
                                            select name="status" aria-label="Status" {
                                                @for st in BookingStatus::ALL {
                                                    option value=(st.as_str()) selected[st == b.status] { (st) }
                                                }
                                            }
                                            button type="submit" class="button small" { "Update" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "New booking" }
                    (form_alert(vm.error))
                    @if vm.guests.is_empty() || vm.rooms.is_empty() {
                        p class="muted" { "Add at least one guest and one room first." }
                    } @else {
                        form action=(base) method="post" {
                            div class="field" {
                                label for="guestId" { "Guest" }
                                select id="guestId" name="guestId" required {
                                    @for g in vm.guests {
                                        option value=(g.id) { (g.full_name()) }
                                    }
                                }
                            }
                            div class="field" {
                                label for="roomId" { "Room" }
                                select id="roomId" name="roomId" required {
                                    @for r in vm.rooms {
                                        option value=(r.id) { (r.name) " (" (r.beds) " beds)" }
                                    }
                                }
                            }
                            div class="field" {
                                label for="checkIn" { "Check-in" }
                                input type="date" id="checkIn" name="checkIn" required;
                            }
                            div class="field" {
                                label for="checkOut" { "Check-out" }
                                input type="date" id="checkOut" name="checkOut" required;
                            }
                            div class="field" {
                                label for="beds" { "Beds" }
                                input type="number" id="beds" name="beds" min="1" value="1";
                            }
                            button type="submit" class="primary" { "Create booking" }
                        }
                    }
                }
            }
        },
    )
}
