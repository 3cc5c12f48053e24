use crate::domain::property::Property;
use maud::{html, Markup};

/// Tabs shown on every page scoped to a property.
pub fn property_nav(property: &Property, active: &str) -> Markup {
    let base = format!("/properties/{}", property.id);
    let tabs = [
        ("dashboard", "Dashboard"),
        ("guests", "Guests"),
        ("rooms", "Rooms"),
        ("bookings", "Bookings"),
    ];
    html! {
        nav class="property-nav" {
            h2 { (property.name) @if let Some(city) = &property.city { small class="muted" { " · " (city) } } }
            ul class="tabs" {
                @for (slug, label) in tabs {
                    li class=[(slug == active).then_some("active")] {
                        a href=(format!("{base}/{slug}")) { (label) }
                    }
                }
            }
        }
    }
}
