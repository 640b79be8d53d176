// ============================
// crates/backend-lib/src/views.rs
// ============================
//! Askama views for the login, signup and home pages.
use askama::Template;

/// Login page, served at `/`
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginView;

/// Signup page
#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupView;

/// Home page for an authenticated user
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeView<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_view_renders_name() {
        let html = HomeView { name: "alice" }.render().unwrap();
        assert!(html.contains("alice"));
    }

    #[test]
    fn test_home_view_escapes_name() {
        let html = HomeView {
            name: "<script>alert(1)</script>",
        }
        .render()
        .unwrap();
        assert!(!html.contains("<script>"));
    }
}
