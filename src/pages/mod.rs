//! Feature views, one module per routed page.

pub mod dashboard;
pub mod email;
pub mod home;
pub mod journal_form;
pub mod journal_view;
pub mod login;
pub mod signup;
