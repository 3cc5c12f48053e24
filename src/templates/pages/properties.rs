use crate::domain::property::Property;
use crate::templates::components::form_alert;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn properties_page(email: &str, properties: &[Property], error: Option<&str>) -> Markup {
    desktop_layout(
        "Properties",
        Some(email),
        html! {
            main class="container" {
                h1 { "Properties" }

                @if properties.is_empty() {
                    p class="muted" { "You have not added a property yet." }
                } @else {
                    ul class="property-list" {
                        @for p in properties {
                            li {
                                a href=(format!("/properties/{}/dashboard", p.id)) { (p.name) }
                                @if let Some(city) = &p.city { span class="muted" { " · " (city) } }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Add a property" }
                    (form_alert(error))
                    form action="/properties" method="post" {
                        div class="field" {
                            label for="name" { "Name *" }
                            input type="text" id="name" name="name" required;
                        }
                        div class="field" {
                            label for="city" { "City" }
                            input type="text" id="city" name="city";
                        }
                        button type="submit" class="primary" { "Create property" }
                    }
                }
            }
        },
    )
}
