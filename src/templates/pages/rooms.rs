use crate::domain::property::{Property, Room, RoomAvailability};
use crate::templates::components::{form_alert, property_nav};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct RoomsVm<'a> {
    pub email: &'a str,
    pub property: &'a Property,
    pub rooms: &'a [Room],
    /// Free beds for the `from`..`to` stay, when one was asked for.
    pub availability: Option<&'a [RoomAvailability]>,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub fn rooms_page(vm: &RoomsVm<'_>) -> Markup {
    let base = format!("/properties/{}/rooms", vm.property.id);
    let total_beds: i64 = vm.rooms.iter().map(|r| r.beds).sum();
    let rows: Vec<(&Room, Option<i64>)> = vm
        .rooms
        .iter()
        .map(|r| {
            let free = vm
                .availability
                .and_then(|a| a.iter().find(|x| x.room.id == r.id))
                .map(|x| x.free_beds);
            (r, free)
        })
        .collect();
    let total_free: Option<i64> = vm.availability.map(|a| a.iter().map(|x| x.free_beds).sum());

    desktop_layout(
        &format!("Rooms · {}", vm.property.name),
        Some(vm.email),
        html! {
            main class="container" {
                (property_nav(vm.property, "rooms"))

                div class="toolbar" {
                    form action=(base) method="get" class="search" {
                        label for="from" { "From" }
                        input type="date" id="from" name="from" value=[vm.from];
                        label for="to" { "To" }
                        input type="date" id="to" name="to" value=[vm.to];
                        button type="submit" { "Check availability" }
                    }
                    a href=(format!("{base}/export")) class="button" { "Export .xlsx" }
                }

                @if rows.is_empty() {
                    p class="muted" { "No rooms yet." }
                } @else {
                    table class="table" {
                        thead {
                            tr {
                                th { "Room" } th { "Beds" }
                                @if total_free.is_some() { th { "Free" } }
                                th {}
                            }
                        }
                        tbody {
                            @for (r, free) in &rows {
                                tr {
                                    td { (r.name) }
                                    td { (r.beds) }
                                    @if let Some(free) = free { td { (free) } }
                                    td { a href=(format!("{base}/{}", r.id)) { "Edit" } }
                                }
                            }
                        }
                        tfoot {
                            tr {
                                th { "Total" } th { (total_beds) }
                                @if let Some(free) = total_free { th { (free) } }
                                th {}
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Add a room" }
                    (form_alert(vm.error))
                    form action=(base) method="post" {
                        div class="field" {
                            label for="name" { "Name *" }
                            input type="text" id="name" name="name" required;
                        }
                        div class="field" {
                            label for="beds" { "Beds *" }
                            input type="number" id="beds" name="beds" min="1" value="1" required;
                        }
                        button type="submit" class="primary" { "Add room" }
                    }
                }
            }
        },
    )
}

/// Rename/resize form plus the delete button. `name` and `beds` echo what
/// was submitted when re-rendering after a refusal.
pub fn room_edit_page(
    email: &str,
    property: &Property,
    room: &Room,
    name: &str,
    beds: &str,
    error: Option<&str>,
) -> Markup {
    let action = format!("/properties/{}/rooms/{}", property.id, room.id);
    desktop_layout(
        &format!("{} · {}", room.name, property.name),
        Some(email),
        html! {
            main class="container" {
                (property_nav(property, "rooms"))

                section class="card" {
                    h3 { "Edit " (room.name) }
                    (form_alert(error))
                    form action=(action) method="post" {
                        div class="field" {
                            label for="name" { "Name *" }
                            input type="text" id="name" name="name" value=(name) required;
                        }
                        div class="field" {
                            label for="beds" { "Beds *" }
                            input type="number" id="beds" name="beds" min="1" value=(beds) required;
                        }
                        button type="submit" class="primary" { "Save changes" }
                    }
                    form action=(format!("{action}/delete")) method="post" class="inline" {
                        button type="submit" class="button danger" { "Delete room" }
                    }
                }
            }
        },
    )
}
