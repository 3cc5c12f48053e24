use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One big number with a caption, as on the property dashboard.
pub fn stat_card(label: &str, value: &str, caption: &str) -> Markup {
    html! {
        div class="card stat" {
            h3 class="stat-label" { (label) }
            p class="stat-value" { (value) }
            p class="stat-caption muted" { (caption) }
        }
    }
}
