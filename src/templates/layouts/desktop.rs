use maud::{html, Markup, DOCTYPE};

/// Page shell. `signed_in_as` switches the header between the app nav and a sign-in link.
pub fn desktop_layout(title: &str, signed_in_as: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · HostelPulse" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { "HostelPulse" }
                    @if let Some(email) = signed_in_as {
                        nav {
                            ul {
                                li { a href="/dashboard" { "Dashboard" } }
                                li { a href="/properties" { "Properties" } }
                            }
                        }
                        div class="account" {
                            span class="muted" { (email) }
                            form action="/logout" method="post" class="inline" {
                                button type="submit" class="link" { "Sign out" }
                            }
                        }
                    } @else {
                        a href="/login" class="text-base font-medium hover:text-blue-600" { "Login" }
                    }
                }
                (content)
            }
        }
    }
}
