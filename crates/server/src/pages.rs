//! HTML rendering.
//!
//! Markup is assembled by string interpolation. Whether untrusted text is
//! escaped first is up to [`Variant::render`](crate::Variant).

use std::borrow::Cow;

use axum::{extract::State, response::Html};

use crate::{ServerState, Variant};

pub(crate) async fn home(State(state): State<ServerState>) -> Html<String> {
    let mut html = String::from(
        "<h1>Welcome to the demo application</h1>\
         <p><a href=\"/users\">Browse users</a></p>\
         <p><a href=\"/search\">Search for a user</a></p>",
    );
    if state.variant.exposes_admin() {
        html.push_str("<p><a href=\"/admin\">Admin panel</a></p>");
    }
    Html(html)
}

pub(crate) async fn search_form() -> Html<&'static str> {
    Html(
        "<h1>Search for a user</h1>\
         <form action=\"/search_result\" method=\"get\">\
         <input type=\"text\" name=\"username\" placeholder=\"Username\">\
         <button type=\"submit\">Search</button>\
         </form>",
    )
}

pub(crate) const ADMIN_PANEL: &str = "<h1>Admin panel</h1>\
     <p>Welcome to the administration panel!</p>\
     <ul>\
     <li><a href=\"/admin/delete_all\">Delete all users</a></li>\
     <li><a href=\"/admin/config\">System configuration</a></li>\
     </ul>";

/// One `<li>id - username - email</li>` per user.
fn push_user_items(html: &mut String, users: &[store::User], variant: Variant) {
    html.push_str("<ul>");
    for user in users {
        html.push_str(&format!(
            "<li>{} - {} - {}</li>",
            user.id,
            variant.render(&user.username),
            variant.render(&user.email)
        ));
    }
    html.push_str("</ul>");
}

pub(crate) fn user_list(users: &[store::User], variant: Variant) -> String {
    let mut html = String::from("<h1>User list</h1>");
    push_user_items(&mut html, users, variant);
    html
}

pub(crate) fn search_results(term: &str, users: &[store::User], variant: Variant) -> String {
    let mut html = format!("<h1>Results for: {}</h1>", variant.render(term));
    push_user_items(&mut html, users, variant);
    html.push_str("<p><a href=\"/search\">New search</a></p>");
    html
}

pub(crate) fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
