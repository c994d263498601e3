//! Bare HTML for the page-shaped endpoints.
//!
//! Everything is escaped except the profile text on the profile page.

use axum::response::Html;

use crate::config::ExposedConfig;
use crate::users::User;

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title} - VulnApp</title></head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/login\">Login</a> | <a href=\"/register\">Register</a> | \
         <a href=\"/dashboard\">Dashboard</a> | <a href=\"/profile\">Profile</a> | <a href=\"/admin\">Admin</a> | \
         <a href=\"/search\">Search</a> | <a href=\"/settings\">Settings</a> | <a href=\"/logout\">Logout</a></nav>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    ))
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn index() -> Html<String> {
    layout(
        "VulnApp",
        "<p>Training target for the OWASP Top 5. Every page here is broken on purpose.</p>",
    )
}

pub fn not_found() -> Html<String> {
    layout("Not Found", "<p>The requested URL was not found on the server.</p>")
}

fn form(action: &str, fields: &[(&str, &str)]) -> String {
    let inputs: String = fields
        .iter()
        .map(|(name, kind)| format!("<label>{name} <input type=\"{kind}\" name=\"{name}\"></label><br>\n"))
        .collect();
    format!("<form method=\"post\" action=\"{action}\">\n{inputs}<button type=\"submit\">Submit</button>\n</form>")
}

pub fn login() -> Html<String> {
    layout(
        "Login",
        &form("/login", &[("username", "text"), ("password", "password")]),
    )
}

pub fn register() -> Html<String> {
    layout(
        "Register",
        &form(
            "/register",
            &[("username", "text"), ("password", "password"), ("email", "text")],
        ),
    )
}

pub fn search() -> Html<String> {
    layout(
        "Search",
        &format!(
            "<p>Fetch any URL through the server.</p>\n{}",
            form("/search", &[("url", "text")])
        ),
    )
}

pub fn dashboard(username: &str) -> Html<String> {
    layout(
        "Dashboard",
        &format!("<p>Welcome, {}!</p>", escape(username)),
    )
}

pub fn admin(users: &[User]) -> Html<String> {
    let rows: String = users
        .iter()
        .map(|u| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                u.id,
                escape(&u.username),
                escape(&u.password),
                escape(&u.email),
                u.role,
                escape(u.profile.as_deref().unwrap_or("")),
                u.created_at,
            )
        })
        .collect();
    layout(
        "Admin Panel",
        &format!(
            "<table>\n<tr><th>ID</th><th>Username</th><th>Password</th><th>Email</th><th>Role</th><th>Profile</th><th>Created</th></tr>\n{rows}</table>"
        ),
    )
}

pub fn profile(user: &User) -> Html<String> {
    layout(
        "Profile",
        &format!(
            "<p>Username: {}</p>\n<p>Email: {}</p>\n<p>Role: {}</p>\n<div class=\"profile\">{}</div>\n{}",
            escape(&user.username),
            escape(&user.email),
            user.role,
            // rendered raw
            user.profile.as_deref().unwrap_or(""),
            form("/update_profile", &[("profile", "text")]),
        ),
    )
}

pub fn settings(config: &ExposedConfig) -> Html<String> {
    layout(
        "Settings",
        &format!(
            "<ul>\n<li>Secret key: {}</li>\n<li>Debug mode: {}</li>\n<li>Database: {}</li>\n<li>Version: {}</li>\n</ul>",
            escape(&config.secret_key),
            config.debug_mode,
            escape(&config.database),
            config.version,
        ),
    )
}
